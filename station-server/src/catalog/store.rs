//! Shared, reloadable catalog snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::error::CatalogError;
use super::graph::Catalog;
use super::source::CatalogSource;

/// Thread-safe holder of the current catalog.
///
/// Readers take an `Arc` snapshot and drop the lock before doing any work, so
/// a refresh swaps catalogs without disturbing queries already running
/// against the previous one.
pub struct CatalogStore<S> {
    inner: Arc<RwLock<Arc<Catalog>>>,
    source: Arc<S>,
}

impl<S> Clone for CatalogStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: CatalogSource> CatalogStore<S> {
    /// Create a store by loading from `source`.
    ///
    /// This will fail if the source is unavailable.
    pub async fn load(source: S) -> Result<Self, CatalogError> {
        let catalog = source.load().await?;
        info!(stations = catalog.len(), "loaded catalog");
        Ok(Self::with_catalog(catalog, source))
    }

    /// Create a store around an already loaded catalog.
    pub fn with_catalog(catalog: Catalog, source: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
            source: Arc::new(source),
        }
    }

    /// The current catalog.
    pub async fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&*self.inner.read().await)
    }

    /// Number of stations in the current catalog.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Reload from the source.
    ///
    /// On success, replaces the current catalog. On failure, the existing
    /// catalog is kept and the error is returned.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let catalog = self.source.load().await?;
        let count = catalog.len();

        *self.inner.write().await = Arc::new(catalog);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use std::sync::Mutex;

    /// Source that hands out queued results in order.
    struct ScriptedSource {
        results: Mutex<Vec<Result<Catalog, CatalogError>>>,
    }

    impl ScriptedSource {
        fn new(mut results: Vec<Result<Catalog, CatalogError>>) -> Self {
            results.reverse();
            Self {
                results: Mutex::new(results),
            }
        }
    }

    impl CatalogSource for ScriptedSource {
        async fn load(&self) -> Result<Catalog, CatalogError> {
            self.results
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(CatalogError::Cache { message: "exhausted".into() }))
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        let stations = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Station::new(format!("http://irail.be/stations/NMBS/{i:09}"), *name, 1.0)
            })
            .collect();
        Catalog::new(stations).unwrap()
    }

    #[tokio::test]
    async fn load_and_refresh() {
        let source = ScriptedSource::new(vec![
            Ok(catalog(&["Gent-Sint-Pieters"])),
            Ok(catalog(&["Gent-Sint-Pieters", "Brussel-Zuid"])),
        ]);

        let store = CatalogStore::load(source).await.unwrap();
        assert_eq!(store.len().await, 1);

        let before = store.snapshot().await;
        assert_eq!(store.refresh().await.unwrap(), 2);
        assert_eq!(store.len().await, 2);

        // Old snapshots are untouched by a refresh
        assert_eq!(before.len(), 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_catalog() {
        let source = ScriptedSource::new(vec![Err(CatalogError::Api {
            status: 500,
            message: "boom".into(),
        })]);

        let store = CatalogStore::with_catalog(catalog(&["Brussel-Zuid"]), source);
        assert!(store.refresh().await.is_err());
        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);
        assert_eq!(store.snapshot().await.stations()[0].name, "Brussel-Zuid");
    }

    #[tokio::test]
    async fn load_propagates_source_error() {
        let source = ScriptedSource::new(vec![]);
        assert!(CatalogStore::load(source).await.is_err());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let source = ScriptedSource::new(vec![Ok(catalog(&["A", "B", "C"]))]);
        let store = CatalogStore::with_catalog(catalog(&["A"]), source);
        let other = store.clone();

        store.refresh().await.unwrap();
        assert_eq!(other.len().await, 3);
    }
}
