use thiserror::Error;

use crate::core::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    CatalogError(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
