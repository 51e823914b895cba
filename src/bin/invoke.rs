// src/bin/invoke.rs
//
// Local harness for the serverless handler: resolves credentials, builds an
// invocation event, runs the handler once and prints the response.
use std::fs;

use env_logger::Env;
use structopt::StructOpt;

use pageboard::config::Settings;
use pageboard::credentials::Credentials;
use pageboard::handler::{handle, InvocationEvent};
use pageboard::notion::NotionFetcher;

#[derive(StructOpt, Debug)]
#[structopt(name = "invoke")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, default_value = "config.yml")]
    config: String,

    /// Path to an event JSON file; a plain GET /pages event is used when omitted
    #[structopt(short, long)]
    event: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let settings = Settings::load(&opt.config)?;
    let credentials = Credentials::resolve(&settings)?;
    let fetcher = NotionFetcher::from_settings(&settings.notion, credentials);

    let event: InvocationEvent = match &opt.event {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => InvocationEvent {
            http_method: "GET".to_string(),
            path: "/pages".to_string(),
            ..Default::default()
        },
    };

    let response = handle(&event, &fetcher).await;
    println!("Status Code: {}", response.status_code);
    println!("Headers: {}", serde_json::to_string(&response.headers)?);
    println!("Body: {}", response.body);
    Ok(())
}
