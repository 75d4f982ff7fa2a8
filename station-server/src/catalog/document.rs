//! JSON-LD representation of the stations graph.
//!
//! The catalog is stored as a linked-data document:
//!
//! ```json
//! {
//!   "@id": "http://irail.be/stations",
//!   "@context": { ... },
//!   "@graph": [ { "@id": "...", "name": "...", "avgStopTimes": 12.5 }, ... ]
//! }
//! ```
//!
//! Search results are returned in the same shape, with the query recorded
//! in the document `@id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Station;

/// Document `@id` used when a catalog is built without one.
pub const DEFAULT_DOCUMENT_ID: &str = "http://irail.be/stations";

/// A stations graph as read from storage.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsDocument {
    #[serde(rename = "@id", default = "default_document_id")]
    pub id: String,

    #[serde(rename = "@context", default)]
    pub context: Value,

    #[serde(rename = "@graph")]
    pub graph: Vec<Station>,
}

fn default_document_id() -> String {
    DEFAULT_DOCUMENT_ID.to_string()
}

/// A stations graph as written back to callers.
#[derive(Debug, Serialize)]
pub struct StationsEnvelope<'a> {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@context")]
    pub context: &'a Value,

    #[serde(rename = "@graph")]
    pub graph: Vec<&'a Station>,
}

/// Document `@id` for the results of `query`: `<document id>?q=<query>`.
///
/// The query is percent-encoded when the document id is a valid URL.
pub fn query_document_id(document_id: &str, query: &str) -> String {
    match reqwest::Url::parse_with_params(document_id, &[("q", query)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{document_id}?q={query}"),
    }
}
