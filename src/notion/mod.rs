// src/notion/mod.rs
pub mod client;
pub mod page;

pub use client::{NotionClient, NotionFetcher};
pub use page::{normalize_pages, Page};
