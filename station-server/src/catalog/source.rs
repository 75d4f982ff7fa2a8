//! Where catalogs come from.

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use super::client::HttpSource;
use super::error::CatalogError;
use super::graph::Catalog;

/// Something that can produce a fresh catalog.
///
/// This abstraction lets the server reload from disk or over HTTP, and lets
/// tests supply catalogs built in memory.
pub trait CatalogSource: Send + Sync {
    /// Load a complete catalog.
    fn load(&self) -> impl Future<Output = Result<Catalog, CatalogError>> + Send;
}

/// Catalog stored as a JSON-LD file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = json.len(), "read catalog file");
        Catalog::from_json(&json)
    }
}

/// Either of the built-in sources, chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FileSource),
    Http(HttpSource),
}

impl CatalogSource for AnySource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            AnySource::File(source) => source.load().await,
            AnySource::Http(source) => source.load().await,
        }
    }
}
