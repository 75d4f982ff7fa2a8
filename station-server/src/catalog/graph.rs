//! In-memory station catalog.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::Station;

use super::document::{DEFAULT_DOCUMENT_ID, StationsDocument, StationsEnvelope, query_document_id};
use super::error::CatalogError;

/// An ordered, read-only set of stations.
///
/// Station ids are unique; construction fails otherwise. The order is the
/// order of the source document and carries no ranking meaning.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: String,
    context: Value,
    stations: Vec<Station>,
}

impl Catalog {
    /// Build a catalog from stations, with default document metadata.
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        check_unique_ids(&stations)?;
        Ok(Self {
            id: DEFAULT_DOCUMENT_ID.to_string(),
            context: Value::Null,
            stations,
        })
    }

    /// Build a catalog from a parsed stations document.
    pub fn from_document(document: StationsDocument) -> Result<Self, CatalogError> {
        check_unique_ids(&document.graph)?;
        Ok(Self {
            id: document.id,
            context: document.context,
            stations: document.graph,
        })
    }

    /// Parse a JSON-LD stations document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: StationsDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Replace the document `@id` and `@context`.
    pub fn with_metadata(mut self, id: impl Into<String>, context: Value) -> Self {
        self.id = id.into();
        self.context = context;
        self
    }

    /// The document `@id`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The JSON-LD `@context`.
    pub fn context(&self) -> &Value {
        &self.context
    }

    /// All stations, in document order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Wrap a result list in the catalog's envelope.
    ///
    /// An empty query yields the document's own `@id`.
    pub fn envelope<'a>(&'a self, query: &str, stations: Vec<&'a Station>) -> StationsEnvelope<'a> {
        let id = if query.is_empty() {
            self.id.clone()
        } else {
            query_document_id(&self.id, query)
        };
        StationsEnvelope {
            id,
            context: &self.context,
            graph: stations,
        }
    }
}

fn check_unique_ids(stations: &[Station]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(stations.len());
    for station in stations {
        if !seen.insert(station.id.as_str()) {
            return Err(CatalogError::DuplicateId(station.id.clone()));
        }
    }
    Ok(())
}
