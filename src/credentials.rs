// src/credentials.rs
use std::collections::HashMap;
use std::env;
use std::fs;

use crate::config::Settings;
use crate::error::AppError;

pub const API_KEY_VAR: &str = "NOTION_API_KEY";
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";
pub const SECRET_FILE_VAR: &str = "SECRET_FILE";

/// Notion API key and database id, validated to be non-empty. Resolved once
/// at startup by the caller and passed into the fetcher explicitly; there is
/// no process-wide cache.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub database_id: String,
}

impl Credentials {
    pub fn new(api_key: String, database_id: String) -> Result<Self, AppError> {
        if api_key.trim().is_empty() || database_id.trim().is_empty() {
            return Err(AppError::MissingCredentials);
        }
        Ok(Self {
            api_key,
            database_id,
        })
    }

    /// Resolves credentials from the environment, falling back to a JSON
    /// secrets file (the local stand-in for a managed secret store) named by
    /// `SECRET_FILE` or the config file.
    pub fn resolve(settings: &Settings) -> Result<Self, AppError> {
        if let (Ok(api_key), Ok(database_id)) = (env::var(API_KEY_VAR), env::var(DATABASE_ID_VAR)) {
            return Self::new(api_key, database_id);
        }

        let path = env::var(SECRET_FILE_VAR)
            .ok()
            .or_else(|| settings.notion.secret_file.clone())
            .ok_or(AppError::MissingCredentials)?;

        Self::from_secret_file(&path)
    }

    fn from_secret_file(path: &str) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read secret file {}: {}", path, e)))?;
        let secrets: HashMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("invalid secret file {}: {}", path, e)))?;

        let api_key = secrets.get(API_KEY_VAR).cloned().unwrap_or_default();
        let database_id = secrets.get(DATABASE_ID_VAR).cloned().unwrap_or_default();
        Self::new(api_key, database_id)
    }
}
