//! Current-streak calculation over a flattened contribution calendar.

use chrono::{Local, NaiveDate};

use crate::models::DayRecord;

/// Compute the current streak against the local calendar date.
pub fn current_streak(days: &[DayRecord]) -> u32 {
    current_streak_at(Local::now().date_naive(), days)
}

/// Count consecutive days, most recent first, with nonzero activity.
///
/// The walk runs from the newest record to the oldest. A zero count on
/// exactly `today` is skipped without breaking the streak (today's activity
/// may not be finalised yet); a zero count on any day strictly older than
/// `today` terminates the walk. If `today` has no record at all, the walk
/// simply starts at the newest day present — the absent-today and
/// zero-today cases are deliberately not normalised to each other.
///
/// Pure: no I/O, same input always yields the same streak.
pub fn current_streak_at(today: NaiveDate, days: &[DayRecord]) -> u32 {
    let mut sorted: Vec<DayRecord> = days.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    for day in &sorted {
        if day.date == today && day.count == 0 {
            continue;
        }
        if day.count > 0 {
            streak += 1;
        } else if day.date < today {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
    }

    /// Build records for `today - offsets[i]` days with the paired counts.
    fn days(counts: &[(i64, u32)]) -> Vec<DayRecord> {
        counts
            .iter()
            .map(|&(offset, count)| DayRecord::new(today() - Duration::days(offset), count))
            .collect()
    }

    // ── Basic walks ──────────────────────────────────────────────────────────

    #[test]
    fn test_all_nonzero_counts_whole_window() {
        let records = days(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(current_streak_at(today(), &records), 4);
    }

    #[test]
    fn test_zero_on_older_day_breaks_streak() {
        // (today,0), (d-1,3), (d-2,0), (d-3,5): skip today, count d-1, stop.
        let records = days(&[(0, 0), (1, 3), (2, 0), (3, 5)]);
        assert_eq!(current_streak_at(today(), &records), 1);
    }

    #[test]
    fn test_streak_counts_only_days_newer_than_first_gap() {
        let records = days(&[(0, 2), (1, 4), (2, 1), (3, 0), (4, 9), (5, 9)]);
        assert_eq!(current_streak_at(today(), &records), 3);
    }

    #[test]
    fn test_all_zero_counts_yield_zero() {
        let records = days(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(current_streak_at(today(), &records), 0);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        assert_eq!(current_streak_at(today(), &[]), 0);
    }

    // ── Today handling ───────────────────────────────────────────────────────

    #[test]
    fn test_zero_today_does_not_break_streak() {
        let records = days(&[(0, 0), (1, 5), (2, 2)]);
        assert_eq!(current_streak_at(today(), &records), 2);
    }

    #[test]
    fn test_nonzero_today_is_counted() {
        let records = days(&[(0, 7), (1, 5), (2, 0)]);
        assert_eq!(current_streak_at(today(), &records), 2);
    }

    #[test]
    fn test_today_absent_walk_starts_at_newest_present() {
        // No record for today at all: yesterday's zero breaks immediately.
        let records = days(&[(1, 0), (2, 3), (3, 3)]);
        assert_eq!(current_streak_at(today(), &records), 0);
    }

    #[test]
    fn test_today_absent_with_nonzero_yesterday() {
        let records = days(&[(1, 3), (2, 3), (3, 0)]);
        assert_eq!(current_streak_at(today(), &records), 2);
    }

    // ── Input order independence ─────────────────────────────────────────────

    #[test]
    fn test_input_order_does_not_matter() {
        let mut records = days(&[(0, 0), (1, 3), (2, 0), (3, 5)]);
        records.reverse();
        assert_eq!(current_streak_at(today(), &records), 1);
    }
}
