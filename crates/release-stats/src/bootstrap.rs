use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a user-supplied level name onto a `tracing` filter directive.
///
/// Accepts the usual aliases (`WARNING`, `CRITICAL`, any casing).  Unknown
/// names are passed through and rejected later by [`EnvFilter`].
pub fn filter_directive(log_level: &str) -> String {
    let lower = log_level.to_lowercase();
    match lower.as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => lower,
    }
}

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `log_level` is used,
/// falling back to `"info"` if it does not parse.  Output goes to stderr so
/// it never mixes with data written to stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(log_level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
