//! ESPN fantasy hockey data access.
//!
//! - `http`: raw endpoint calls
//! - `types`: response payloads
//! - `league`: standings and the draft board assembled from those payloads

pub mod http;
pub mod league;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use http::EspnClient;
pub use league::LeagueClient;
