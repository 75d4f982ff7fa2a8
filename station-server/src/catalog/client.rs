//! HTTP catalog source.

use tracing::{debug, info, warn};

use super::cache::CatalogCache;
use super::error::CatalogError;
use super::graph::Catalog;
use super::source::CatalogSource;

/// Where the published iRail stations graph lives.
pub const DEFAULT_CATALOG_URL: &str = "https://irail.be/stations/NMBS";

/// Configuration for the HTTP catalog source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// URL of the JSON-LD document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    /// Create a new config for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

/// Catalog downloaded over HTTP, optionally backed by a disk cache.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    url: String,
    cache: Option<CatalogCache>,
}

impl HttpSource {
    /// Create a new HTTP source.
    pub fn new(config: HttpSourceConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
            cache: None,
        })
    }

    /// Keep a copy of every downloaded document on disk.
    pub fn with_cache(mut self, cache: CatalogCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Download the raw document.
    pub async fn fetch(&self) -> Result<String, CatalogError> {
        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/ld+json, application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        if let Some(json) = self.cache.as_ref().and_then(CatalogCache::load) {
            match Catalog::from_json(&json) {
                Ok(catalog) => {
                    debug!(url = %self.url, "using cached catalog");
                    return Ok(catalog);
                }
                Err(e) => warn!(error = %e, "ignoring unreadable catalog cache"),
            }
        }

        let json = self.fetch().await?;
        let catalog = Catalog::from_json(&json)?;
        info!(url = %self.url, stations = catalog.len(), "downloaded catalog");

        if let Some(cache) = &self.cache
            && let Err(e) = cache.save(&json)
        {
            warn!(error = %e, path = %cache.path().display(), "failed to write catalog cache");
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogCacheConfig;

    #[test]
    fn config_defaults() {
        let config = HttpSourceConfig::default();
        assert_eq!(config.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpSourceConfig::new("http://localhost:8080/stations").with_timeout_secs(5);
        assert_eq!(config.url, "http://localhost:8080/stations");
        assert_eq!(config.timeout_secs, 5);
    }

    #[tokio::test]
    async fn fresh_cache_avoids_network() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(CatalogCacheConfig::new(dir.path().join("stations.json")));
        cache
            .save(r#"{"@graph": [{"@id": "http://irail.be/stations/NMBS/008892007", "name": "Gent-Sint-Pieters"}]}"#)
            .unwrap();

        // Nothing listens on port 9; only the cache can satisfy this load.
        let source = HttpSource::new(HttpSourceConfig::new("http://127.0.0.1:9/stations"))
            .unwrap()
            .with_cache(cache);

        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].name, "Gent-Sint-Pieters");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        let source = HttpSource::new(
            HttpSourceConfig::new("http://127.0.0.1:9/stations").with_timeout_secs(2),
        )
        .unwrap();

        assert!(matches!(source.load().await, Err(CatalogError::Http(_))));
    }
}
