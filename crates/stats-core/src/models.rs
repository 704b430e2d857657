use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── DayRecord ─────────────────────────────────────────────────────────────────

/// One day of the flattened contribution calendar.
///
/// Produced by flattening the source's week → day grouping; dates are unique
/// across the whole collection and gap-free for well-formed source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayRecord {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

// ── ProfileStats ──────────────────────────────────────────────────────────────

/// Aggregate summary produced by the gather phase.
///
/// Derived and transient: recomputed on every run, never persisted. The apply
/// phase reads it but never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Total repositories owned by the viewer.
    pub repo_count: u64,
    /// Stars summed across every repository page.
    pub star_total: u64,
    /// Lifetime pull request count.
    pub pr_total: u64,
    /// Commit contributions summed across the per-year range queries.
    pub commit_total: u64,
    /// Disk usage in KB summed across every repository page.
    pub disk_kb_total: u64,
    /// Contributions in the calendar window reported by the source.
    pub contribution_total: u64,
    /// Consecutive days (most recent first) with nonzero activity.
    pub current_streak: u32,
    /// Counts for the last 7 calendar days, oldest first.
    pub recent_activity: Vec<u32>,
}
