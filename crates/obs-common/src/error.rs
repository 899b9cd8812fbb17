//! Error types for forest-watch crates and services.

use thiserror::Error;

/// Result type alias using DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Primary error type for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    // === Request Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid date specification: {0}")]
    InvalidDate(String),

    #[error("Unknown layer variant: {0}")]
    UnknownVariant(String),

    // === Data Errors ===
    #[error("No data available for date: {0}")]
    NoData(String),

    #[error("Failed to read dataset: {0}")]
    DatasetRead(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Style error: {0}")]
    StyleError(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DashboardError {
    /// Create a DatasetRead error.
    pub fn dataset_read(msg: impl Into<String>) -> Self {
        Self::DatasetRead(msg.into())
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            DashboardError::InvalidParameter { .. }
            | DashboardError::InvalidDate(_)
            | DashboardError::UnknownVariant(_) => 400,

            DashboardError::NoData(_) => 404,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::DatasetRead(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::InternalError(format!("JSON error: {}", err))
    }
}
