// src/notion/client.rs
use async_trait::async_trait;
use serde_json::json;

use crate::config::NotionConfig;
use crate::credentials::Credentials;
use crate::error::AppError;
use crate::fetcher::PageSource;

use super::page::{normalize_pages, Page, QueryResponse, RawPage};

pub const NOTION_VERSION: &str = "2022-06-28";

/// Thin client over the Notion database query endpoint.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    sort_property: String,
}

impl NotionClient {
    pub fn new(base_url: String, api_key: String, sort_property: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            api_key,
            sort_property,
        }
    }

    /// Issues a single query for all entries of the database, sorted by the
    /// date property, descending. Only the first page of results is
    /// consumed; the databases served here are small enough that pagination
    /// never triggers.
    pub async fn query_database(&self, database_id: &str) -> Result<Vec<RawPage>, AppError> {
        let url = format!(
            "{}/v1/databases/{}/query",
            self.base_url.trim_end_matches('/'),
            database_id
        );
        let body = json!({
            "sorts": [{
                "property": self.sort_property,
                "direction": "descending",
            }]
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw = response.text().await?;
        let query: QueryResponse = serde_json::from_str(&raw)?;
        Ok(query.results)
    }
}

/// `NotionClient` bound to one database: the page source the HTTP layers use.
pub struct NotionFetcher {
    client: NotionClient,
    database_id: String,
}

impl NotionFetcher {
    pub fn new(client: NotionClient, database_id: String) -> Self {
        Self {
            client,
            database_id,
        }
    }

    pub fn from_settings(config: &NotionConfig, credentials: Credentials) -> Self {
        let client = NotionClient::new(
            config.api_base.clone(),
            credentials.api_key,
            config.sort_property.clone(),
        );
        Self::new(client, credentials.database_id)
    }
}

#[async_trait]
impl PageSource for NotionFetcher {
    async fn fetch_pages(&self) -> Result<Vec<Page>, AppError> {
        let results = self.client.query_database(&self.database_id).await?;
        Ok(normalize_pages(results))
    }
}
