//! Unified error types for the API service.

use thiserror::Error;

/// Unified error type for the API service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
