// src/error.rs

//! Unified error handling for the scraper.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session credential was rejected by the admin surface
    #[error("Credential error: {0}")]
    Credential(String),

    /// A level page did not have the markup shape we rely on
    #[error("Unexpected page shape at {context}: {message}")]
    PageShape { context: String, message: String },

    /// A raw date string matched none of the known Atlas formats
    #[error("Unrecognized date format: {0}")]
    Date(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a credential error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential(message.into())
    }

    /// Create a page-shape error with context.
    pub fn page_shape(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::PageShape {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a date-format error.
    pub fn date(raw: impl Into<String>) -> Self {
        Self::Date(raw.into())
    }
}
