//! Local copy of the last downloaded stations document.
//!
//! The published graph changes rarely, so `HttpSource` keeps the raw JSON-LD
//! body on disk next to the time it was fetched and reuses it until it is
//! older than the configured TTL.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Downloads older than this are fetched again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// On-disk layout: the document body plus its fetch time.
#[derive(Debug, Serialize, Deserialize)]
struct CachedDocument {
    /// Seconds since the Unix epoch.
    fetched_at: u64,
    body: String,
}

/// Location and lifetime of the document cache.
#[derive(Debug, Clone)]
pub struct CatalogCacheConfig {
    pub path: PathBuf,
    pub ttl: Duration,
}

impl CatalogCacheConfig {
    /// Cache at `path`, valid for [`DEFAULT_CACHE_TTL`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// The stations document as last fetched over HTTP.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    config: CatalogCacheConfig,
}

impl CatalogCache {
    pub fn new(config: CatalogCacheConfig) -> Self {
        Self { config }
    }

    /// The cached document body, if one was written within the TTL.
    ///
    /// A missing, unreadable or stale file all count as a miss.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.config.path).ok()?;
        let cached: CachedDocument = serde_json::from_str(&raw).ok()?;

        let age = unix_now().ok()?.saturating_sub(cached.fetched_at);
        (age < self.config.ttl.as_secs()).then_some(cached.body)
    }

    /// Store a freshly downloaded document body.
    pub fn save(&self, body: &str) -> Result<(), CatalogError> {
        let cached = CachedDocument {
            fetched_at: unix_now()?,
            body: body.to_string(),
        };
        let json = serde_json::to_string(&cached).map_err(|e| cache_error("encode", e))?;

        let path = &self.config.path;
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(|e| cache_error("create directory for", e))?;
        }
        std::fs::write(path, json).map_err(|e| cache_error("write", e))
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }
}

fn cache_error(action: &str, err: impl std::fmt::Display) -> CatalogError {
    CatalogError::Cache {
        message: format!("failed to {action} catalog cache: {err}"),
    }
}

fn unix_now() -> Result<u64, CatalogError> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| cache_error("timestamp", e))
}
