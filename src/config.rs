// src/config.rs
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotionConfig {
    pub api_base: String,
    /// Name of the date property the database is sorted by.
    pub sort_property: String,
    /// Optional path to a JSON secrets file holding the API key and
    /// database id, used when the environment variables are not set.
    pub secret_file: Option<String>,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.notion.com".to_string(),
            sort_property: "日付".to_string(),
            secret_file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub notion: NotionConfig,
    pub static_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            notion: NotionConfig::default(),
            static_dir: "static".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from an optional config file, layered with
    /// `APP_`-prefixed environment variables (e.g. `APP_SERVER__PORT`).
    /// Every field has a default, so running with no config file works.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let settings = Settings::load("does-not-exist").unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.notion.api_base, "https://api.notion.com");
        assert_eq!(settings.notion.sort_property, "日付");
        assert!(settings.notion.secret_file.is_none());
        assert_eq!(settings.static_dir, "static");
    }
}
