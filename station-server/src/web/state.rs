//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::ServerConfig;

/// Shared application state.
pub struct AppState<S> {
    /// Current station catalog
    pub catalog: CatalogStore<S>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(catalog: CatalogStore<S>, config: ServerConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            config: Arc::clone(&self.config),
        }
    }
}
