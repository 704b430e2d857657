//! Named substitution patterns for the two HTML fragments.
//!
//! Each pattern captures the markup around a figure in groups 1 and 2 and
//! swaps only the figure itself, so the fragments keep their hand-written
//! structure between runs.

use regex::Regex;

use stats_core::calculations::{average_monthly, estimated_lines};
use stats_core::formatting::{format_compact, format_grouped};
use stats_core::models::ProfileStats;

// ── Replacement ───────────────────────────────────────────────────────────────

/// One named match-and-replace rule.
pub struct Replacement {
    /// Short name used in log lines.
    pub name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl Replacement {
    fn new(name: &'static str, pattern: &str, value: impl std::fmt::Display) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("replacement pattern is valid"),
            replacement: format!("${{1}}{value}${{2}}"),
        }
    }

    /// Number of places this rule would touch in `content`.
    pub fn match_count(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }

    /// Apply the rule to every match in `content`.
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, self.replacement.as_str())
            .into_owned()
    }
}

// ── Rule sets ─────────────────────────────────────────────────────────────────

/// Rules for `primary_stats.html`: the big commit counter, the current
/// streak and the repository total.
pub fn primary_stats_replacements(stats: &ProfileStats) -> Vec<Replacement> {
    vec![
        Replacement::new(
            "total_commits",
            r#"(?s)(TOTAL_COMMITS\s*</p>.*?<p [^>]*class="[^"]*text-\[120px\][^"]*"[^>]*>)\s*.*?\s*(</p>)"#,
            format_grouped(stats.commit_total),
        ),
        Replacement::new(
            "current_streak",
            r#"(?s)(Current_Streak\s*</p>\s*<p [^>]*class="[^"]*text-[56]xl[^"]*"[^>]*>)\s*.*?\s*(<span[^>]*>DAYS</span>\s*</p>)"#,
            stats.current_streak,
        ),
        Replacement::new(
            "total_repos",
            r#"(?s)(Total_Repos\s*</p>\s*<p [^>]*class="[^"]*text-[56]xl[^"]*"[^>]*>)\s*.*?\s*(</p>)"#,
            stats.repo_count,
        ),
    ]
}

/// Rules for `analytics.html`: star and PR totals, the estimated lines
/// figure and the average monthly contributions. `month` is the current
/// 1-based month used for the monthly average.
pub fn analytics_replacements(stats: &ProfileStats, month: u32) -> Vec<Replacement> {
    let lines = estimated_lines(stats.disk_kb_total, stats.commit_total);

    vec![
        Replacement::new(
            "total_stars",
            r#"(Stars: ).*?(\s*</h4>)"#,
            format_compact(stats.star_total),
        ),
        Replacement::new("total_prs", r#"(PRs: ).*?(\s*</h4>)"#, stats.pr_total),
        Replacement::new(
            "total_lines",
            r#"(?s)(Total_Lines_Committed\s*</p>\s*</div>\s*<p [^>]*class="[^"]*text-[67]xl[^"]*"[^>]*>)\s*.*?\s*(</p>)"#,
            format!("{}+", format_compact(lines)),
        ),
        Replacement::new(
            "avg_monthly",
            r#"(?s)(<p [^>]*class="[^"]*text-[34]xl[^"]*"[^>]*>)\s*.*?\s*(</p>\s*<p [^>]*>Avg_Monthly</p>)"#,
            average_monthly(stats.contribution_total, month),
        ),
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────
