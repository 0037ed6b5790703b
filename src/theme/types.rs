use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind popups.
    pub mantle: Color,
    /// Subtle surface color for chips and card backgrounds.
    pub surface1: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for summaries and captions.
    pub subtext0: Color,
    /// Accent color for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for headings and category tags.
    pub mauve: Color,
    /// Warning state color (busy refresh button).
    pub yellow: Color,
    /// Error state color.
    pub red: Color,
    /// Accent color for borders of the focused element.
    pub lavender: Color,
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Backend base URL; `None` uses the built-in default.
    pub server_url: Option<String>,
    /// Poll period in minutes; `None` or zero uses the default.
    pub poll_minutes: Option<u64>,
    /// Use the backend refresh endpoint instead of the simulated refresh.
    pub dev_real_refresh: bool,
    /// Connect to the push event stream.
    pub stream_enabled: bool,
    /// Length of the simulated refresh delay in seconds.
    pub simulated_refresh_secs: u64,
    /// First push reconnect delay in seconds.
    pub stream_backoff_base_secs: u64,
    /// Upper bound of the push reconnect delay in seconds.
    pub stream_backoff_max_secs: u64,
    /// Default filter chips, shown before categories found in the data.
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: None,
            poll_minutes: None,
            dev_real_refresh: false,
            stream_enabled: true,
            simulated_refresh_secs: super::DEFAULT_SIMULATED_REFRESH_SECS,
            stream_backoff_base_secs: super::DEFAULT_BACKOFF_BASE_SECS,
            stream_backoff_max_secs: super::DEFAULT_BACKOFF_MAX_SECS,
            categories: super::DEFAULT_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        }
    }
}
