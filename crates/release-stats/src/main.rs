mod bootstrap;
mod palette;

use anyhow::{Context, Result};
use clap::Parser;
use release_core::settings::{ChartArgs, Command, HistoryArgs, Settings};
use release_data::aggregator::SeriesAggregator;
use release_data::fetch::fetch_releases;
use release_data::history::build_history;
use release_data::storage::{load_history, write_json};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("release-stats v{} starting", env!("CARGO_PKG_VERSION"));

    match settings.command {
        Command::History(args) => run_history(&args).await,
        Command::Chart(args) => run_chart(&args),
    }
}

/// Fetch all releases, normalize them and write the history file.
async fn run_history(args: &HistoryArgs) -> Result<()> {
    // Validate before touching the network or the filesystem.
    let config = args.fetch_config()?;

    let outcome = fetch_releases(&config).await?;
    if let Some(err) = &outcome.interrupted_by {
        tracing::warn!(
            "Pagination stopped early ({}); writing {} releases fetched so far",
            err,
            outcome.releases.len()
        );
    }

    let history = build_history(&outcome.releases);
    write_json(&args.output, &history)
        .with_context(|| format!("writing release history for {}", config.project))?;

    tracing::info!(
        "Wrote {} releases to {}",
        history.len(),
        args.output.display()
    );
    Ok(())
}

/// Load a history file and write the aligned chart datasets.
fn run_chart(args: &ChartArgs) -> Result<()> {
    let history = load_history(&args.input)?;
    let releases = SeriesAggregator::order_for_chart(history, args.order);
    let matrix = SeriesAggregator::aggregate(&releases);

    if args.colors {
        write_json(&args.output, &palette::colorize(&matrix))?;
    } else {
        write_json(&args.output, &matrix)?;
    }

    tracing::info!(
        "Wrote {} datasets over {} releases to {}",
        matrix.datasets.len(),
        matrix.labels.len(),
        args.output.display()
    );
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
