use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, StatsError};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Refresh the stats figures embedded in the profile page HTML fragments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "profile-stats",
    about = "Refresh the stats figures embedded in the profile page HTML fragments",
    version
)]
pub struct Settings {
    /// GitHub API bearer token
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GraphQL endpoint
    #[arg(long, default_value = "https://api.github.com/graphql")]
    pub api_url: String,

    /// Primary stats HTML fragment
    #[arg(long, default_value = "sections/primary_stats.html")]
    pub primary_file: PathBuf,

    /// Analytics HTML fragment
    #[arg(long, default_value = "sections/analytics.html")]
    pub analytics_file: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Gather and log the stats without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

impl Settings {
    /// Return the bearer token, or fail before any network call is made.
    pub fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(StatsError::MissingToken),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
