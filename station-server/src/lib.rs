//! Railway station lookup.
//!
//! Resolves free-text queries and station identifiers against a catalog of
//! stations: normalized substring search ranked by match position, match
//! length and service frequency, plus exact lookup for URI, legacy and bare
//! ids. The catalog is a JSON-LD graph loaded from disk or HTTP.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod lookup;
pub mod normalize;
pub mod web;
