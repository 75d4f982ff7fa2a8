//! Station catalog loading.
//!
//! A catalog is read from a JSON-LD stations graph, either a local file or
//! a published URL, and shared between requests through a `CatalogStore`
//! that can be refreshed in the background.

mod cache;
mod client;
mod document;
mod error;
mod graph;
mod source;
mod store;

pub use cache::{CatalogCache, CatalogCacheConfig, DEFAULT_CACHE_TTL};
pub use client::{DEFAULT_CATALOG_URL, HttpSource, HttpSourceConfig};
pub use document::{DEFAULT_DOCUMENT_ID, StationsDocument, StationsEnvelope, query_document_id};
pub use error::CatalogError;
pub use graph::Catalog;
pub use source::{AnySource, CatalogSource, FileSource};
pub use store::CatalogStore;
