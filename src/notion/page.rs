// src/notion/page.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fallback title for pages whose title property is absent or empty.
pub const UNTITLED: &str = "無題";

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawPage>,
}

/// One record as returned by the database query, before normalization.
#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub properties: HashMap<String, PageProperty>,
}

/// A property value tagged with its declared kind. Only title and date
/// matter here; everything else collapses into `Other`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageProperty {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    Date {
        date: Option<DateValue>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: String,
}

/// Normalized page entry served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub date: Option<String>,
    pub url: String,
}

impl Page {
    /// Extracts the display title and date from the property bag. The lookup
    /// takes the first property of the matching kind regardless of its name;
    /// databases are expected to have one of each.
    pub fn from_raw(raw: RawPage) -> Self {
        let title = raw
            .properties
            .values()
            .find_map(|prop| match prop {
                PageProperty::Title { title } => Some(title),
                _ => None,
            })
            .and_then(|fragments| fragments.first())
            .map(|fragment| fragment.plain_text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let date = raw
            .properties
            .values()
            .find_map(|prop| match prop {
                PageProperty::Date { date } => Some(date.as_ref()),
                _ => None,
            })
            .flatten()
            .map(|value| value.start.clone())
            .filter(|start| !start.is_empty());

        Page {
            id: raw.id,
            title,
            date,
            url: raw.url,
        }
    }
}

pub fn normalize_pages(results: Vec<RawPage>) -> Vec<Page> {
    results.into_iter().map(Page::from_raw).collect()
}
