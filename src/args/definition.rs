//! Command-line argument definition and processing.

use clap::Parser;
use newsdeck::app::{CliOverrides, RunConfig};

/// newsdeck - A terminal news dashboard with category filters and live refresh
#[derive(Parser, Debug)]
#[command(name = "newsdeck")]
#[command(version)]
#[command(about = "A terminal news dashboard with category filters and live refresh", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Backend base URL (default: settings `server_url`, else http://127.0.0.1:5000)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Minutes between background reloads (0 falls back to settings, then 60)
    #[arg(long, value_name = "MINUTES")]
    pub poll: Option<u64>,

    /// Refresh through the backend's /api/refresh instead of the simulated refresh
    #[arg(long)]
    pub dev: bool,

    /// Do not listen to the backend's push event stream
    #[arg(long)]
    pub no_stream: bool,

    /// Fetch the articles once, print them and exit (no TUI)
    #[arg(long)]
    pub list: bool,

    /// Only print this category (use with --list)
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Command-line values that override persisted settings.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            poll_minutes: self.poll,
            dev: self.dev,
            no_stream: self.no_stream,
        }
    }
}

/// What: Handle the non-interactive modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `config`: Effective configuration
///
/// Output:
/// - `Some(exit_code)` when a command-line mode ran and the process should exit;
///   `None` to continue to the TUI.
pub async fn process_args(args: &Args, config: &RunConfig) -> Option<i32> {
    if args.category.is_some() && !args.list {
        tracing::warn!("--category has no effect without --list");
    }
    if args.list {
        return Some(super::list::handle_list(config, args.category.as_deref()).await);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into the expected overrides.
    fn flags_map_to_overrides() {
        let args = Args::parse_from([
            "newsdeck",
            "--server",
            "http://x:1",
            "--poll",
            "5",
            "--dev",
            "--no-stream",
        ]);
        let o = args.overrides();
        assert_eq!(o.server.as_deref(), Some("http://x:1"));
        assert_eq!(o.poll_minutes, Some(5));
        assert!(o.dev);
        assert!(o.no_stream);
        assert!(!args.list);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: A non-numeric poll value is rejected by the parser.
    fn poll_must_be_numeric() {
        assert!(Args::try_parse_from(["newsdeck", "--poll", "soon"]).is_err());
    }
}
