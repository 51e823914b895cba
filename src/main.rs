// src/main.rs
use std::sync::Arc;

use env_logger::Env;
use log::info;
use structopt::StructOpt;

use pageboard::api_server::run_server;
use pageboard::config::Settings;
use pageboard::credentials::Credentials;
use pageboard::notion::NotionFetcher;

#[derive(StructOpt, Debug)]
#[structopt(name = "pageboard")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, default_value = "config.yml")]
    config: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let settings = match Settings::load(&opt.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Credentials are resolved exactly once, before the server starts; the
    // fetcher carries them for the life of the process.
    let credentials = match Credentials::resolve(&settings) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Notion credentials resolved");

    let fetcher = NotionFetcher::from_settings(&settings.notion, credentials);
    run_server(settings, Arc::new(fetcher)).await
}
