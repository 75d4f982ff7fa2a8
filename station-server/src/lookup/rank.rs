//! Ranking order for search candidates.
//!
//! One comparator serves every ranking path. `Ordering::Less` means the
//! left-hand candidate ranks higher.

use std::cmp::Ordering;

use crate::domain::Station;

use super::matching::Candidate;

/// Compare two candidates by relevance.
///
/// Candidates are ranked by:
/// 1. Having a match at all
/// 2. Match position (earlier is better)
/// 3. Match length (longer is better)
/// 4. Vehicle frequency (busier is better)
pub fn compare_relevance(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    let textual = match (a.matched, b.matched) {
        (Some(x), Some(y)) => x
            .position
            .cmp(&y.position)
            .then_with(|| y.length.cmp(&x.length)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    textual.then_with(|| compare_frequency(a.station, b.station))
}

/// Compare two stations by average stop count, busiest first.
///
/// Uses the IEEE total order so the comparison stays total for any `f64`.
pub fn compare_frequency(a: &Station, b: &Station) -> Ordering {
    b.avg_stop_times.total_cmp(&a.avg_stop_times)
}
