// src/fetcher.rs
use async_trait::async_trait;

use crate::error::AppError;
use crate::notion::Page;

/// Source of normalized page entries. The HTTP server and the serverless
/// handler both depend on this seam rather than the Notion client directly.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_pages(&self) -> Result<Vec<Page>, AppError>;
}
