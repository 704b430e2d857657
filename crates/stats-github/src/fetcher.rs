//! The gather phase: one run of paged and per-year queries producing an
//! immutable [`ProfileStats`] summary.
//!
//! Everything here happens before any output file is touched; a failure in
//! any query aborts the whole run with no partial result.

use chrono::{DateTime, Datelike, Local};
use serde_json::json;

use stats_core::calculations::recent_activity;
use stats_core::error::Result;
use stats_core::models::ProfileStats;
use stats_core::streak::current_streak_at;

use crate::client::QueryRunner;
use crate::models::{ProfilePayload, RepoNode, RepoPagePayload, YearCommitsPayload};

// ── Query documents ───────────────────────────────────────────────────────────

/// Initial query: profile basics, first repository page, PR total and the
/// rolling contribution calendar.
const PROFILE_QUERY: &str = "
query($cursor: String) {
  viewer {
    login
    createdAt
    repositories(first: 100, ownerAffiliations: OWNER, after: $cursor) {
      totalCount
      nodes {
        stargazerCount
        diskUsage
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
    pullRequests {
      totalCount
    }
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
";

/// Follow-up repository pages, driven by the cursor from the previous page.
const REPO_PAGE_QUERY: &str = "
query($cursor: String) {
  viewer {
    repositories(first: 100, ownerAffiliations: OWNER, after: $cursor) {
      nodes {
        stargazerCount
        diskUsage
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}
";

/// Commit contributions within one bounded date range (one calendar year).
const YEAR_COMMITS_QUERY: &str = "
query($from: DateTime, $to: DateTime) {
  viewer {
    contributionsCollection(from: $from, to: $to) {
      totalCommitContributions
    }
  }
}
";

// ── Gather phase ──────────────────────────────────────────────────────────────

/// Gather all profile stats, anchored at the current local time.
pub fn gather_profile_stats(runner: &dyn QueryRunner) -> Result<ProfileStats> {
    gather_profile_stats_at(runner, Local::now())
}

/// Gather all profile stats with an explicit "now".
///
/// Issues, strictly in sequence: the initial profile query, one follow-up
/// query per remaining repository page, and one bounded date-range query per
/// year from the account-creation year through `now`'s year. The first error
/// aborts the run.
pub fn gather_profile_stats_at(
    runner: &dyn QueryRunner,
    now: DateTime<Local>,
) -> Result<ProfileStats> {
    let data = runner.run_query(PROFILE_QUERY, None)?;
    let profile: ProfilePayload = serde_json::from_value(data)?;
    let viewer = profile.viewer;

    tracing::info!(login = %viewer.login, "fetched profile for viewer");

    let repo_count = viewer.repositories.total_count;
    let (mut star_total, mut disk_kb_total) = sum_repo_metrics(&viewer.repositories.nodes);

    // Page through the rest of the repository connection.
    let mut page_info = viewer.repositories.page_info;
    while page_info.has_next_page {
        let variables = json!({ "cursor": page_info.end_cursor });
        let data = runner.run_query(REPO_PAGE_QUERY, Some(variables))?;
        let page: RepoPagePayload = serde_json::from_value(data)?;

        let (stars, disk_kb) = sum_repo_metrics(&page.viewer.repositories.nodes);
        star_total += stars;
        disk_kb_total += disk_kb;
        page_info = page.viewer.repositories.page_info;
    }

    // One bounded range per year; the current year ends at "now" rather
    // than Dec 31.
    let start_year = viewer.created_at.year();
    let mut commit_total = 0;
    for year in start_year..=now.year() {
        let (from, to) = year_bounds(year, now);
        let data = runner.run_query(YEAR_COMMITS_QUERY, Some(json!({ "from": from, "to": to })))?;
        let payload: YearCommitsPayload = serde_json::from_value(data)?;
        commit_total += payload
            .viewer
            .contributions_collection
            .total_commit_contributions;
    }

    let calendar = &viewer.contributions_collection.contribution_calendar;
    let days = calendar.flatten();
    let today = now.date_naive();

    Ok(ProfileStats {
        repo_count,
        star_total,
        pr_total: viewer.pull_requests.total_count,
        commit_total,
        disk_kb_total,
        contribution_total: calendar.total_contributions,
        current_streak: current_streak_at(today, &days),
        recent_activity: recent_activity(&days),
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Sum (stars, disk KB) over one page of repository nodes.
///
/// An empty page contributes (0, 0); a null disk usage counts as 0.
fn sum_repo_metrics(nodes: &[RepoNode]) -> (u64, u64) {
    nodes.iter().fold((0, 0), |(stars, disk_kb), node| {
        (
            stars + node.stargazer_count,
            disk_kb + node.disk_usage.unwrap_or(0),
        )
    })
}

/// ISO-8601 bounds for one calendar year.
///
/// The current year is capped at `now` instead of running to Dec 31.
fn year_bounds(year: i32, now: DateTime<Local>) -> (String, String) {
    let from = format!("{year}-01-01T00:00:00Z");
    let to = if year == now.year() {
        now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        format!("{year}-12-31T23:59:59Z")
    };
    (from, to)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
