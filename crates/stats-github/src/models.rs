//! Typed shapes for the GraphQL payloads the fetcher consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use stats_core::models::DayRecord;

// ── Profile query ─────────────────────────────────────────────────────────────

/// `data` payload of the initial profile query.
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub login: String,
    pub created_at: DateTime<Utc>,
    pub repositories: RepositoryPage,
    pub pull_requests: TotalCount,
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

// ── Repository connection ─────────────────────────────────────────────────────

/// One page of the viewer's repository connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPage {
    /// Only present on the initial query; the paged follow-ups omit it.
    #[serde(default)]
    pub total_count: u64,
    pub nodes: Vec<RepoNode>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNode {
    pub stargazer_count: u64,
    /// KB on disk; the API reports null for empty repositories.
    pub disk_usage: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// `data` payload of the cursor-paged repository query.
#[derive(Debug, Deserialize)]
pub struct RepoPagePayload {
    pub viewer: RepoPageViewer,
}

#[derive(Debug, Deserialize)]
pub struct RepoPageViewer {
    pub repositories: RepositoryPage,
}

// ── Contribution calendar ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    pub date: NaiveDate,
}

impl ContributionCalendar {
    /// Flatten the week → day grouping into a single chronological sequence.
    ///
    /// Order is whatever the source emitted; callers sort as needed.
    pub fn flatten(&self) -> Vec<DayRecord> {
        self.weeks
            .iter()
            .flat_map(|week| week.contribution_days.iter())
            .map(|day| DayRecord::new(day.date, day.contribution_count))
            .collect()
    }
}

// ── Yearly commit query ───────────────────────────────────────────────────────

/// `data` payload of the bounded-date-range commit query.
#[derive(Debug, Deserialize)]
pub struct YearCommitsPayload {
    pub viewer: YearCommitsViewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCommitsViewer {
    pub contributions_collection: CommitContributions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitContributions {
    pub total_commit_contributions: u64,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_payload_deserializes() {
        let payload: ProfilePayload = serde_json::from_value(json!({
            "viewer": {
                "login": "octocat",
                "createdAt": "2019-03-14T12:00:00Z",
                "repositories": {
                    "totalCount": 42,
                    "nodes": [
                        {"stargazerCount": 7, "diskUsage": 120},
                        {"stargazerCount": 0, "diskUsage": null}
                    ],
                    "pageInfo": {"hasNextPage": true, "endCursor": "abc=="}
                },
                "pullRequests": {"totalCount": 15},
                "contributionsCollection": {
                    "contributionCalendar": {
                        "totalContributions": 300,
                        "weeks": [
                            {"contributionDays": [
                                {"contributionCount": 2, "date": "2026-08-29"},
                                {"contributionCount": 0, "date": "2026-08-30"}
                            ]}
                        ]
                    }
                }
            }
        }))
        .expect("deserialize profile payload");

        let viewer = payload.viewer;
        assert_eq!(viewer.login, "octocat");
        assert_eq!(viewer.created_at.format("%Y").to_string(), "2019");
        assert_eq!(viewer.repositories.total_count, 42);
        assert_eq!(viewer.repositories.nodes.len(), 2);
        assert_eq!(viewer.repositories.nodes[1].disk_usage, None);
        assert!(viewer.repositories.page_info.has_next_page);
        assert_eq!(viewer.pull_requests.total_count, 15);
    }

    #[test]
    fn test_repo_page_payload_without_total_count() {
        let payload: RepoPagePayload = serde_json::from_value(json!({
            "viewer": {
                "repositories": {
                    "nodes": [],
                    "pageInfo": {"hasNextPage": false, "endCursor": null}
                }
            }
        }))
        .expect("deserialize repo page");

        let page = payload.viewer.repositories;
        assert_eq!(page.total_count, 0);
        assert!(page.nodes.is_empty());
        assert!(!page.page_info.has_next_page);
        assert!(page.page_info.end_cursor.is_none());
    }

    #[test]
    fn test_calendar_flatten_spans_weeks() {
        let calendar: ContributionCalendar = serde_json::from_value(json!({
            "totalContributions": 9,
            "weeks": [
                {"contributionDays": [
                    {"contributionCount": 1, "date": "2026-08-24"},
                    {"contributionCount": 3, "date": "2026-08-25"}
                ]},
                {"contributionDays": [
                    {"contributionCount": 5, "date": "2026-08-31"}
                ]}
            ]
        }))
        .expect("deserialize calendar");

        let days = calendar.flatten();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].count, 1);
        assert_eq!(days[2].date.to_string(), "2026-08-31");
    }

    #[test]
    fn test_year_commits_payload_deserializes() {
        let payload: YearCommitsPayload = serde_json::from_value(json!({
            "viewer": {
                "contributionsCollection": {"totalCommitContributions": 812}
            }
        }))
        .expect("deserialize year commits");
        assert_eq!(
            payload
                .viewer
                .contributions_collection
                .total_commit_contributions,
            812
        );
    }
}
