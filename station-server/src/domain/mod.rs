//! Domain types for station lookup.
//!
//! A `Station` is the only entity the lookup engine knows about. Catalogs
//! own their stations and hand out shared references for the duration of a
//! query.

mod station;

pub use station::Station;
