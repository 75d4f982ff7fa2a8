//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string for station search.
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    /// Free-text query; empty or absent returns the whole catalog
    #[serde(default)]
    pub q: String,

    /// Country code (e.g., "be"); accepted but not filtered on yet
    pub country: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Query string for station lookup by id.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Station URI, `BE.NMBS.` id, or bare NMBS id
    pub id: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
