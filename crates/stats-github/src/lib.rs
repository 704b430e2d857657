//! GitHub data layer for the profile stats updater.
//!
//! Responsible for issuing GraphQL queries against the API, paging through
//! the repository connection, summing the per-year commit contributions and
//! producing the immutable [`stats_core::models::ProfileStats`] summary
//! consumed by the apply phase.

pub mod client;
pub mod fetcher;
pub mod models;

pub use stats_core as core;
