//! Web layer for station lookup.
//!
//! Exposes relevance search and id resolution over HTTP, returning stations
//! in the catalog's JSON-LD shape.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
