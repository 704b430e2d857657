//! HTML output layer for the profile stats updater.
//!
//! The apply phase: takes the immutable stats summary from the gather phase
//! and splices formatted values into the static HTML fragments by regex
//! substitution. A missing fragment or an unmatched pattern is reported and
//! skipped, never fatal.

pub mod patterns;
pub mod rewrite;

pub use stats_core as core;
