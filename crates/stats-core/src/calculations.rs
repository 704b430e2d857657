//! Derived metrics computed from the gathered aggregates.

use crate::models::DayRecord;

/// Number of trailing calendar days shown in the activity flow chart.
pub const RECENT_WINDOW: usize = 7;

/// Maximum bar height (percent) in the activity flow chart.
const BAR_CEILING: f64 = 90.0;

/// Minimum visible bar height (percent).
const BAR_FLOOR: u32 = 5;

/// Extract the recent-activity window from a flattened day sequence.
///
/// Sorts ascending by date and returns the last [`RECENT_WINDOW`] counts,
/// oldest first. Shorter inputs are returned whole.
pub fn recent_activity(days: &[DayRecord]) -> Vec<u32> {
    let mut sorted: Vec<DayRecord> = days.to_vec();
    sorted.sort_by_key(|d| d.date);

    let start = sorted.len().saturating_sub(RECENT_WINDOW);
    sorted[start..].iter().map(|d| d.count).collect()
}

/// Scale activity counts to bar heights in the 0–90 percent range.
///
/// Heights are normalised against the window maximum; anything that rounds
/// down to 0 percent (including genuinely zero counts) is raised to the
/// 5-percent floor so every bar stays visible.
pub fn scale_bar_heights(counts: &[u32]) -> Vec<u32> {
    let max = counts.iter().copied().max().unwrap_or(0).max(1);

    counts
        .iter()
        .map(|&count| {
            let scaled = (f64::from(count) / f64::from(max) * BAR_CEILING) as u32;
            if scaled == 0 {
                BAR_FLOOR
            } else {
                scaled
            }
        })
        .collect()
}

/// Estimate total lines committed from disk usage and commit count.
///
/// Disk usage (KB) × 40 lines/KB as a proxy, plus a 100-line weight per
/// commit.
pub fn estimated_lines(disk_kb: u64, commits: u64) -> u64 {
    disk_kb * 40 + commits * 100
}

/// Average monthly contributions for the year so far.
///
/// `month` is the current 1-based month number; a zero month passes the
/// total through unchanged.
pub fn average_monthly(contribution_total: u64, month: u32) -> u64 {
    if month > 0 {
        contribution_total / u64::from(month)
    } else {
        contribution_total
    }
}
