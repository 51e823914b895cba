// src/api_server.rs
use std::sync::Arc;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::Settings;
use crate::fetcher::PageSource;
use crate::router::{self, AppState};

pub async fn run_server(settings: Settings, source: Arc<dyn PageSource>) -> std::io::Result<()> {
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Starting server on http://{}", bind_addr);

    let static_dir = settings.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                source: source.clone(),
            }))
            .configure(router::configure)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(bind_addr)?
    .run()
    .await
}
