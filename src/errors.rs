//! Unified application error type.
//! All modules (cli, config, models, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    // ---------------------------
    // Input-domain guards
    // ---------------------------
    #[error("Invalid value for {field}: {msg}")]
    OutOfRange { field: String, msg: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for an input bound violation.
    pub fn out_of_range(field: &str, msg: impl Into<String>) -> Self {
        AppError::OutOfRange {
            field: field.to_string(),
            msg: msg.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
