mod bootstrap;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;

use stats_core::calculations::scale_bar_heights;
use stats_core::settings::Settings;
use stats_github::client::GithubClient;
use stats_github::fetcher::gather_profile_stats;
use stats_html::patterns::{analytics_replacements, primary_stats_replacements};
use stats_html::rewrite::{apply_bar_heights, apply_replacements};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;
    tracing::info!("profile-stats v{} starting", env!("CARGO_PKG_VERSION"));

    // Missing credential is fatal before any network call goes out.
    let token = settings.require_token()?;

    // Gather phase: every query must succeed before any file is touched.
    let client = GithubClient::new(&settings.api_url, token)?;
    tracing::info!("fetching profile data...");
    let stats = gather_profile_stats(&client)?;
    tracing::info!(?stats, "gather phase complete");

    if settings.dry_run {
        tracing::info!("dry run, skipping file updates");
        return Ok(());
    }

    // Apply phase: per-file and per-pattern misses are logged and skipped.
    tracing::info!("updating HTML files...");
    let heights = scale_bar_heights(&stats.recent_activity);
    apply_bar_heights(&settings.analytics_file, &heights)?;

    apply_replacements(&settings.primary_file, &primary_stats_replacements(&stats))?;

    let month = Local::now().month();
    apply_replacements(
        &settings.analytics_file,
        &analytics_replacements(&stats, month),
    )?;

    tracing::info!("done");
    Ok(())
}
