// src/router.rs
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;
use crate::fetcher::PageSource;
use crate::notion::Page;

pub struct AppState {
    pub source: Arc<dyn PageSource>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PagesResponse {
    pub pages: Vec<Page>,
}

async fn get_pages(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let pages = state.source.fetch_pages().await?;
    Ok(HttpResponse::Ok().json(PagesResponse { pages }))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/pages").route(web::get().to(get_pages)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health() {
        let mut app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::with_uri("/api/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(resp["status"], "ok");
    }
}
