//! Substring match scoring.

use crate::domain::Station;
use crate::normalize::normalize;

/// Where a normalized query occurs inside a normalized station name.
///
/// `position` and `length` count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub position: usize,
    pub length: usize,
}

/// A query prepared for matching against many names.
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    folded: String,
    length: usize,
}

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let length = normalized.chars().count();
        let (folded, _) = lowercase_indexed(&normalized);
        Self { folded, length }
    }

    /// The normalized, lowercased query text.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Find the first case-insensitive occurrence of the query in `name`.
    ///
    /// The name goes through the same normalization as the query, and the
    /// position counts characters of the normalized name. An empty query
    /// matches every name at position 0.
    pub fn find_in(&self, name: &str) -> Option<Match> {
        let (lowered, starts) = lowercase_indexed(&normalize(name));
        let byte_pos = lowered.find(&self.folded)?;
        let position = starts
            .partition_point(|&start| start <= byte_pos)
            .saturating_sub(1);
        Some(Match {
            position,
            length: self.length,
        })
    }
}

/// Lowercase `text` one character at a time.
///
/// Returns the lowered text and, for each character of `text`, the byte
/// offset in the lowered text where its lowercase form starts. Some
/// characters lower to more than one (`İ` becomes `i` plus a combining dot),
/// so offsets in the two strings do not line up on their own.
fn lowercase_indexed(text: &str) -> (String, Vec<usize>) {
    let mut lowered = String::with_capacity(text.len());
    let mut starts = Vec::with_capacity(text.len());
    for c in text.chars() {
        starts.push(lowered.len());
        lowered.extend(c.to_lowercase());
    }
    (lowered, starts)
}

/// A station paired with its match against the current query.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub station: &'a Station,
    pub matched: Option<Match>,
}

impl<'a> Candidate<'a> {
    /// Score `station` against `query`.
    pub fn score(query: &NormalizedQuery, station: &'a Station) -> Self {
        Self {
            station,
            matched: query.find_in(&station.name),
        }
    }
}
