//! File-level substitution: read a fragment, apply the rules, write it back.
//!
//! Recoverable conditions (missing file, unmatched pattern) are logged and
//! skipped so the remaining substitutions and the other fragment still go
//! through; only actual read/write failures bubble up.

use std::path::Path;

use regex::{Captures, Regex};

use stats_core::error::{Result, StatsError};

use crate::patterns::Replacement;

/// Opening tag of the 7-column activity-flow grid wrapping the bar divs.
const GRID_PATTERN: &str = r#"<div class="grid grid-cols-7 gap-3 h-48 items-end px-2">"#;

/// One bar's height class, e.g. `h-[45%]`.
const BAR_PATTERN: &str = r#"(<div class="[^"]*h-\[).*?(%?\][^"]*")"#;

// ── Named replacements ────────────────────────────────────────────────────────

/// Apply `replacements` to the fragment at `path`.
///
/// A missing file is a warning, not an error; rules that match nowhere are
/// reported and skipped. The file is rewritten only when at least one rule
/// matched.
pub fn apply_replacements(path: &Path, replacements: &[Replacement]) -> Result<()> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "file not found, skipping");
        return Ok(());
    }

    let mut content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut modified = false;
    for rule in replacements {
        let matches = rule.match_count(&content);
        if matches == 0 {
            tracing::warn!(rule = rule.name, "no matches found for pattern");
            continue;
        }
        content = rule.apply(&content);
        tracing::info!(rule = rule.name, matches, "updated");
        modified = true;
    }

    if modified {
        std::fs::write(path, &content).map_err(|source| StatsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "successfully updated");
    } else {
        tracing::info!(path = %path.display(), "no changes made");
    }

    Ok(())
}

// ── Activity bar chart ────────────────────────────────────────────────────────

/// Rewrite the bar heights inside the activity-flow grid at `path`.
///
/// Same skip semantics as [`apply_replacements`]: missing file or missing
/// grid markup is a warning.
pub fn apply_bar_heights(path: &Path, heights: &[u32]) -> Result<()> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "file not found, skipping");
        return Ok(());
    }

    let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match rewrite_bar_heights(&content, heights) {
        Some(updated) => {
            std::fs::write(path, &updated).map_err(|source| StatsError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(?heights, "updated activity flow bar chart");
        }
        None => {
            tracing::warn!(path = %path.display(), "activity grid not found, skipping");
        }
    }

    Ok(())
}

/// Substitute the bar heights positionally inside the grid markup.
///
/// The first `heights.len()` bar classes after the grid opening tag are
/// rewritten in document order; anything before the grid, and bars beyond
/// the supplied heights, are left as they are. Returns `None` when the grid
/// markup is absent.
fn rewrite_bar_heights(content: &str, heights: &[u32]) -> Option<String> {
    // replacen treats a limit of 0 as "replace everything".
    if heights.is_empty() {
        return Some(content.to_string());
    }

    let grid = Regex::new(GRID_PATTERN).expect("grid pattern is valid");
    let bar = Regex::new(BAR_PATTERN).expect("bar pattern is valid");

    let opening = grid.find(content)?;
    let (head, tail) = content.split_at(opening.end());

    let mut index = 0;
    let new_tail = bar.replacen(tail, heights.len(), |m: &Captures| {
        let height = heights[index];
        index += 1;
        format!("{}{}{}", &m[1], height, &m[2])
    });

    Some(format!("{head}{new_tail}"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
