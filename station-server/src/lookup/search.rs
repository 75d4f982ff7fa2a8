//! Relevance search over a catalog.

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::Station;

use super::matching::{Candidate, NormalizedQuery};
use super::rank::compare_relevance;
use super::top_k::TopK;

/// Number of results returned when the caller doesn't ask for a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Find the stations most relevant to `query`, best first.
///
/// An empty query returns the whole catalog in document order and ignores
/// `limit`. Otherwise at most `limit` stations are returned, ranked by
/// [`compare_relevance`]; stations that do not contain the query still
/// fill the remaining slots, busiest first.
///
/// `country` is accepted but not filtered on yet.
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    country: Option<&str>,
    limit: usize,
) -> Vec<&'a Station> {
    if let Some(country) = country {
        debug!(country, "country filter is not supported, ignoring");
    }

    if query.is_empty() {
        return catalog.stations().iter().collect();
    }

    let query = NormalizedQuery::new(query);
    let mut best: TopK<Candidate<'a>, _> = TopK::new(limit, compare_relevance);
    for station in catalog.stations() {
        best.offer(Candidate::score(&query, station));
    }

    debug!(query = query.as_str(), limit, found = best.len(), "ranked stations");

    best.into_sorted_vec()
        .into_iter()
        .map(|candidate| candidate.station)
        .collect()
}
