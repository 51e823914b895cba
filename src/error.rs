// src/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;

/// Fixed message returned when credentials are missing, with no further detail.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Notion API key or database ID is not configured";

/// Fixed message returned for any upstream failure; the underlying error
/// message travels alongside it in the `details` field.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Failed to fetch data from the Notion API";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Notion API key or database ID is not configured")]
    MissingCredentials,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to Notion failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notion API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Notion response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppError {
    /// JSON body presented to clients. Configuration problems get a fixed
    /// message only; upstream failures carry the underlying message as
    /// `details`.
    pub fn response_body(&self) -> Value {
        match self {
            AppError::MissingCredentials => json!({ "error": MISSING_CREDENTIALS_MESSAGE }),
            AppError::Config(message) => json!({ "error": message }),
            other => json!({
                "error": UPSTREAM_ERROR_MESSAGE,
                "details": other.to_string(),
            }),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("request failed: {}", self);
        HttpResponse::build(self.status_code()).json(self.response_body())
    }
}
