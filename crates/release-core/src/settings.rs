use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::error::{Result, StatsError};

/// Default GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the releases endpoint honours.
pub const MAX_PAGE_SIZE: u32 = 100;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Release asset download statistics
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release-stats",
    about = "Collect release asset download counts and build chart datasets",
    version
)]
pub struct Settings {
    /// Logging level
    #[arg(long, global = true, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch every release of a project and write the normalized history
    History(HistoryArgs),

    /// Fold a saved history into label-aligned chart datasets
    Chart(ChartArgs),
}

/// Arguments of the `history` subcommand.
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Project as `owner/repo`
    #[arg(short, long, env = "RELEASE_STATS_PROJECT")]
    pub project: Option<String>,

    /// API token sent as a bearer credential
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Where to write the release history
    #[arg(short, long, default_value = "releases.json")]
    pub output: PathBuf,

    /// Releases requested per page (1-100)
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub page_size: u32,

    /// API root URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// Arguments of the `chart` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Release history produced by `history`
    #[arg(short, long, default_value = "releases.json")]
    pub input: PathBuf,

    /// Where to write the chart datasets
    #[arg(short, long, default_value = "chart.json")]
    pub output: PathBuf,

    /// Direction of the label axis
    #[arg(long, value_enum, default_value_t = ChartOrder::Chronological)]
    pub order: ChartOrder,

    /// Attach a display colour to every dataset
    #[arg(long)]
    pub colors: bool,
}

/// Order in which releases are laid out along the chart's label axis.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartOrder {
    /// Oldest release first.
    #[default]
    Chronological,
    /// Newest release first, as stored in the history file.
    NewestFirst,
}

// ── FetchConfig ────────────────────────────────────────────────────────────────

/// Validated inputs for the release fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// `owner/repo`.
    pub project: String,
    pub token: String,
    pub page_size: u32,
    /// API root without a trailing slash.
    pub api_url: String,
}

impl FetchConfig {
    /// Build a config, rejecting empty credentials and malformed projects.
    pub fn new(
        project: impl Into<String>,
        token: impl Into<String>,
        page_size: u32,
        api_url: impl Into<String>,
    ) -> Result<Self> {
        let project = project.into().trim().to_string();
        let token = token.into().trim().to_string();
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();

        if project.is_empty() {
            return Err(StatsError::Config("a project is required".to_string()));
        }
        if !is_valid_project(&project) {
            return Err(StatsError::Config(format!(
                "project must look like owner/repo, got \"{}\"",
                project
            )));
        }
        if token.is_empty() {
            return Err(StatsError::Config("an API token is required".to_string()));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(StatsError::Config(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }
        if api_url.is_empty() {
            return Err(StatsError::Config("API URL must not be empty".to_string()));
        }

        Ok(Self {
            project,
            token,
            page_size,
            api_url,
        })
    }

    /// URL of the releases list endpoint (without query string).
    pub fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_url, self.project)
    }
}

impl HistoryArgs {
    /// Resolve the parsed flags into a [`FetchConfig`].
    ///
    /// Fails with [`StatsError::Config`] when the project or token is absent.
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let project = self.project.as_deref().ok_or_else(|| {
            StatsError::Config("missing --project (or RELEASE_STATS_PROJECT)".to_string())
        })?;
        let token = self.token.as_deref().ok_or_else(|| {
            StatsError::Config("missing --token (or GITHUB_TOKEN)".to_string())
        })?;
        FetchConfig::new(project, token, self.page_size, self.api_url.as_str())
    }
}

impl Settings {
    /// Effective log level after applying `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }
}

/// `owner/repo` with both halves non-empty and free of whitespace.
fn is_valid_project(project: &str) -> bool {
    let mut parts = project.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) => {
            !owner.is_empty()
                && !repo.is_empty()
                && !project.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
