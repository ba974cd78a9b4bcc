use thiserror::Error;

use crate::admin::actions::ActionId;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action registered twice: {0}")]
    DuplicateAction(ActionId),

    #[error("Unknown admin page: {0}")]
    UnknownPage(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Failures of the key-value backend. Reads never produce these past the
/// store boundary; writes hand them back to the caller.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded for key {0}")]
    QuotaExceeded(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
