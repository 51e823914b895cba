// src/lib.rs
pub mod api_server;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fetcher;
pub mod handler;
pub mod notion;
pub mod router;

pub use config::Settings;
pub use credentials::Credentials;
pub use error::AppError;
pub use notion::Page;
