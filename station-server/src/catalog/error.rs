//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading a station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading a local catalog file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Document is not a valid stations graph
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Two stations share the same `@id`
    #[error("duplicate station id: {0}")]
    DuplicateId(String),

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json {
            message: err.to_string(),
        }
    }
}
