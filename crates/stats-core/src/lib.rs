//! Core domain layer for the profile stats updater.
//!
//! Holds the shared data model (day records and the aggregate stats summary),
//! the streak calculator, derived-metric calculations, number formatting and
//! the CLI settings. Everything here is pure: network access lives in
//! `stats-github` and file mutation in `stats-html`.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod streak;
