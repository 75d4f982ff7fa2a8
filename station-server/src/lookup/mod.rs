//! Station lookup: relevance search by name and exact resolution by id.
//!
//! Both operations are pure functions of a query and a `Catalog`. Nothing
//! here blocks, caches or mutates shared state, so any number of lookups
//! can run against the same catalog at once.

mod matching;
mod rank;
mod resolve;
mod search;
mod top_k;


pub use matching::{Candidate, Match, NormalizedQuery};
pub use rank::{compare_frequency, compare_relevance};
pub use resolve::{LEGACY_ID_PREFIX, STATION_URI_BASE, canonical_id, resolve_by_id};
pub use search::{DEFAULT_LIMIT, search};
pub use top_k::TopK;

use crate::catalog::Catalog;
use crate::domain::Station;

impl Catalog {
    /// See [`search`].
    pub fn search(&self, query: &str, country: Option<&str>, limit: usize) -> Vec<&Station> {
        search::search(self, query, country, limit)
    }

    /// See [`resolve_by_id`].
    pub fn resolve_by_id(&self, id: &str) -> Option<&Station> {
        resolve::resolve_by_id(self, id)
    }
}
