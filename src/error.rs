//! Error handling module for gis-material-update
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns [`Result`]; the binary wraps it with anyhow context.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for material processing
#[derive(Error, Debug)]
pub enum GisError {
    /// IO errors (source files, output files, store tables)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (settings file, profile tables)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No processor is registered under the requested item name
    #[error("Configuration not recognized: {0}")]
    UnknownItem(String),

    /// Source material for an item has not been downloaded
    #[error("Source material missing: {}", .0.display())]
    MissingSource(PathBuf),

    /// Source material is present but does not satisfy the item's rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// persist/save called before process populated the result
    #[error("Item '{0}' has not been processed")]
    NotProcessed(String),
}

/// Result type alias for material processing
pub type Result<T> = std::result::Result<T, GisError>;

impl GisError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GisError::UnknownItem("bogus_item".to_string());
        assert_eq!(err.to_string(), "Configuration not recognized: bogus_item");

        let err = GisError::validation("route without id");
        assert_eq!(err.to_string(), "Validation error: route without id");

        let err = GisError::MissingSource(PathBuf::from("/tmp/hsl_routes.geojson"));
        assert_eq!(
            err.to_string(),
            "Source material missing: /tmp/hsl_routes.geojson"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GisError = io_err.into();
        assert!(matches!(err, GisError::Io(_)));
    }

    #[test]
    fn test_not_processed_names_item() {
        let err = GisError::NotProcessed("tram_infra".to_string());
        assert_eq!(err.to_string(), "Item 'tram_infra' has not been processed");
    }
}
