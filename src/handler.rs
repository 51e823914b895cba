// src/handler.rs
//
// Serverless-style entry point: the same fetch-and-serve operation as the
// HTTP server, shaped as an invocation event in and a status/headers/body
// response out. Runs under the `invoke` binary for local use.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::fetcher::PageSource;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationEvent {
    pub http_method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

fn response_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
    headers
}

pub async fn handle(event: &InvocationEvent, source: &dyn PageSource) -> InvocationResponse {
    log::info!("invoked: {} {}", event.http_method, event.path);

    match source.fetch_pages().await {
        Ok(pages) => InvocationResponse {
            status_code: 200,
            headers: response_headers(),
            body: json!({ "pages": pages }).to_string(),
        },
        Err(e) => {
            log::error!("failed to fetch pages: {}", e);
            InvocationResponse {
                status_code: 500,
                headers: response_headers(),
                body: e.response_body().to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, MISSING_CREDENTIALS_MESSAGE, UPSTREAM_ERROR_MESSAGE};
    use crate::notion::Page;
    use async_trait::async_trait;

    struct StubSource(Vec<Page>);

    #[async_trait]
    impl PageSource for StubSource {
        async fn fetch_pages(&self) -> Result<Vec<Page>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource(fn() -> AppError);

    #[async_trait]
    impl PageSource for FailingSource {
        async fn fetch_pages(&self) -> Result<Vec<Page>, AppError> {
            Err((self.0)())
        }
    }

    fn get_event() -> InvocationEvent {
        InvocationEvent {
            http_method: "GET".to_string(),
            path: "/pages".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn success_returns_pages_payload() {
        let source = StubSource(vec![Page {
            id: "abc".to_string(),
            title: "Sprint Review".to_string(),
            date: Some("2024-05-01".to_string()),
            url: "https://x/abc".to_string(),
        }]);

        let response = handle(&get_event(), &source).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            response
                .headers
                .get("Access-Control-Allow-Origin")
                .map(String::as_str),
            Some("*")
        );

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["pages"][0]["title"], "Sprint Review");
        assert_eq!(body["pages"][0]["date"], "2024-05-01");
    }

    #[tokio::test]
    async fn upstream_failure_returns_error_with_details() {
        let source = FailingSource(|| AppError::Api {
            status: 401,
            message: "invalid token".to_string(),
        });

        let response = handle(&get_event(), &source).await;

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], UPSTREAM_ERROR_MESSAGE);
        assert!(body["details"].as_str().unwrap().contains("invalid token"));
        assert!(body.get("pages").is_none());
    }

    #[tokio::test]
    async fn missing_credentials_returns_fixed_message_only() {
        let source = FailingSource(|| AppError::MissingCredentials);

        let response = handle(&get_event(), &source).await;

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], MISSING_CREDENTIALS_MESSAGE);
        assert!(body.get("details").is_none());
    }

    #[test]
    fn event_deserializes_from_gateway_shape() {
        let event: InvocationEvent = serde_json::from_str(
            r#"{"httpMethod":"GET","path":"/pages","headers":{},"queryStringParameters":null}"#,
        )
        .unwrap();

        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path, "/pages");
        assert!(event.query_string_parameters.is_none());
    }

    #[test]
    fn response_serializes_with_gateway_casing() {
        let response = InvocationResponse {
            status_code: 200,
            headers: response_headers(),
            body: "{}".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert!(value["headers"]["Content-Type"].is_string());
    }
}
