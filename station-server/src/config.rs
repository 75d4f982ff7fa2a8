//! Server and lookup configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{
    AnySource, CatalogCache, CatalogCacheConfig, CatalogError, DEFAULT_CACHE_TTL, FileSource,
    HttpSource, HttpSourceConfig,
};
use crate::lookup::DEFAULT_LIMIT;

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    /// A JSON-LD file on disk.
    File(PathBuf),
    /// A JSON-LD document served over HTTP(S).
    Url(String),
}

impl CatalogLocation {
    /// Interpret `location` as a URL if it has an `http://` or `https://`
    /// scheme, and as a file path otherwise.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogLocation::Url(location.to_string())
        } else {
            CatalogLocation::File(PathBuf::from(location))
        }
    }
}

/// Configuration for the lookup service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Catalog location.
    pub catalog: CatalogLocation,

    /// Address the HTTP server listens on.
    pub bind: SocketAddr,

    /// Results returned when a search doesn't specify a limit.
    pub default_limit: usize,

    /// Upper bound on the limit a caller may request.
    pub max_limit: usize,

    /// How often to reload the catalog. `None` loads it once.
    pub reload_interval: Option<Duration>,

    /// Disk cache for downloaded catalogs. Ignored for file catalogs.
    pub cache_path: Option<PathBuf>,

    /// How long a cached download stays valid.
    pub cache_ttl: Duration,
}

impl ServerConfig {
    /// Create a configuration for the given catalog with default settings.
    pub fn new(catalog: CatalogLocation) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Set the listen address.
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the reload interval. `None` or a zero duration disables reloads.
    pub fn with_reload_interval(mut self, interval: Option<Duration>) -> Self {
        self.reload_interval = interval.filter(|d| !d.is_zero());
        self
    }

    /// Cache downloaded catalogs at `path`.
    pub fn with_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// The number of results to return for a requested limit.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Build the catalog source this configuration describes.
    pub fn source(&self) -> Result<AnySource, CatalogError> {
        match &self.catalog {
            CatalogLocation::File(path) => Ok(AnySource::File(FileSource::new(path))),
            CatalogLocation::Url(url) => {
                let mut source = HttpSource::new(HttpSourceConfig::new(url))?;
                if let Some(path) = &self.cache_path {
                    let config = CatalogCacheConfig::new(path).with_ttl(self.cache_ttl);
                    source = source.with_cache(CatalogCache::new(config));
                }
                Ok(AnySource::Http(source))
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::File(PathBuf::from("stations.jsonld")),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            default_limit: DEFAULT_LIMIT,
            max_limit: 50,
            reload_interval: Some(Duration::from_secs(24 * 60 * 60)),
            cache_path: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}
