use std::time::Duration;

use crate::logic::{resolve_poll_minutes, resolve_refresh_mode};
use crate::state::{AppState, RefreshMode};
use crate::theme::{DEFAULT_SERVER_URL, Settings};

/// Command-line values that override persisted settings.
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    /// `--server`
    pub server: Option<String>,
    /// `--poll`
    pub poll_minutes: Option<u64>,
    /// `--dev`
    pub dev: bool,
    /// `--no-stream`
    pub no_stream: bool,
}

/// Effective configuration of one run, fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Backend base URL.
    pub server_url: String,
    /// Manual refresh behavior.
    pub refresh_mode: RefreshMode,
    /// Poll period in minutes (always positive).
    pub poll_minutes: u64,
    /// Whether the push channel is used.
    pub stream_enabled: bool,
    /// Length of the simulated refresh.
    pub simulated_refresh: Duration,
    /// First push reconnect delay.
    pub backoff_base: Duration,
    /// Upper bound of the push reconnect delay.
    pub backoff_max: Duration,
    /// Default filter chips.
    pub categories: Vec<String>,
}

impl RunConfig {
    /// What: Merge command-line overrides with persisted settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf`
    /// - `cli`: Command-line overrides
    ///
    /// Output:
    /// - The effective configuration.
    ///
    /// Details:
    /// - Server: `--server`, then `server_url`, then the built-in default.
    /// - Poll: first positive of `--poll`, `poll_minutes`, else 60.
    /// - Real refresh when either `--dev` or `dev_real_refresh` is set.
    /// - The stream is off when `--no-stream` is given or `stream_enabled = false`.
    #[must_use]
    pub fn resolve(settings: &Settings, cli: &CliOverrides) -> Self {
        let server_url = cli
            .server
            .clone()
            .or_else(|| settings.server_url.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            refresh_mode: resolve_refresh_mode(cli.dev, settings.dev_real_refresh),
            poll_minutes: resolve_poll_minutes(cli.poll_minutes, settings.poll_minutes),
            stream_enabled: settings.stream_enabled && !cli.no_stream,
            simulated_refresh: Duration::from_secs(settings.simulated_refresh_secs),
            backoff_base: Duration::from_secs(settings.stream_backoff_base_secs),
            backoff_max: Duration::from_secs(settings.stream_backoff_max_secs),
            categories: settings.categories.clone(),
        }
    }
}

/// What: Copy the run configuration into a fresh application state.
///
/// Inputs:
/// - `app`: State to populate
/// - `config`: Effective configuration
pub fn initialize_app_state(app: &mut AppState, config: &RunConfig) {
    app.refresh_mode = config.refresh_mode;
    app.poll_minutes = config.poll_minutes;
    app.stream_enabled = config.stream_enabled;
    app.default_categories.clone_from(&config.categories);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Command-line values win over settings; settings win over defaults.
    ///
    /// Inputs:
    /// - Settings with a server, poll period and stream enabled.
    /// - Overrides that replace some of them.
    ///
    /// Output:
    /// - Each field follows the documented precedence.
    fn cli_overrides_settings() {
        let settings = Settings {
            server_url: Some("http://from-settings:1".into()),
            poll_minutes: Some(30),
            ..Settings::default()
        };
        let none = RunConfig::resolve(&settings, &CliOverrides::default());
        assert_eq!(none.server_url, "http://from-settings:1");
        assert_eq!(none.poll_minutes, 30);
        assert_eq!(none.refresh_mode, RefreshMode::Simulated);
        assert!(none.stream_enabled);
        assert_eq!(none.simulated_refresh, Duration::from_secs(10));

        let cli = CliOverrides {
            server: Some("http://cli:2".into()),
            poll_minutes: Some(0),
            dev: true,
            no_stream: true,
        };
        let cfg = RunConfig::resolve(&settings, &cli);
        assert_eq!(cfg.server_url, "http://cli:2");
        assert_eq!(cfg.poll_minutes, 30, "zero falls through to settings");
        assert_eq!(cfg.refresh_mode, RefreshMode::Real);
        assert!(!cfg.stream_enabled);
    }

    #[test]
    /// What: With nothing configured the built-in defaults apply.
    fn defaults_without_configuration() {
        let settings = Settings {
            categories: Vec::new(),
            ..Settings::default()
        };
        let cfg = RunConfig::resolve(&settings, &CliOverrides::default());
        assert_eq!(cfg.server_url, DEFAULT_SERVER_URL);
        assert_eq!(cfg.poll_minutes, 60);

        let mut app = AppState::default();
        initialize_app_state(&mut app, &cfg);
        assert_eq!(app.poll_minutes, 60);
        assert!(app.default_categories.is_empty());
    }
}
