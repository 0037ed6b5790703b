//! newsdeck binary entrypoint kept minimal. The full runtime lives in `newsdeck::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use newsdeck::{app, theme};

struct NewsdeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for NewsdeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `~/.config/newsdeck/logs/newsdeck.log`.
///
/// Inputs:
/// - `level`: Level used when `RUST_LOG` is not set
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened, so startup never blocks
///   on logging. The TUI would draw over stderr output, so this is a last resort.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("newsdeck.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NewsdeckTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NewsdeckTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = theme::settings();
    let config = app::RunConfig::resolve(&settings, &args.overrides());
    tracing::info!(
        server = %config.server_url,
        mode = ?config.refresh_mode,
        poll_minutes = config.poll_minutes,
        stream = config.stream_enabled,
        "newsdeck starting"
    );

    if let Some(code) = args::process_args(&args, &config).await {
        tracing::info!(code, "newsdeck exited from command-line mode");
        std::process::exit(code);
    }

    if let Err(err) = app::run(config).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("newsdeck exited");
}
