//! Settings, config paths and the color palette.

/// Config value parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// `settings.conf` loading.
mod settings;
/// Theme and settings type definitions.
mod types;

use ratatui::style::Color;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{SETTINGS_SKELETON_CONTENT, load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

/// Backend used when neither `--server` nor `server_url` is set.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Poll period used when no positive value is configured.
pub const DEFAULT_POLL_MINUTES: u64 = 60;
/// Length of the simulated refresh.
pub const DEFAULT_SIMULATED_REFRESH_SECS: u64 = 10;
/// First push reconnect delay.
pub const DEFAULT_BACKOFF_BASE_SECS: u64 = 5;
/// Upper bound of the push reconnect delay.
pub const DEFAULT_BACKOFF_MAX_SECS: u64 = 60;
/// Categories produced by the backend's summarizer.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["技术突破", "产品发布", "行业动态", "投资融资", "政策法规"];

/// Return the application's palette (Catppuccin Mocha).
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        mantle: Color::Rgb(0x18, 0x18, 0x25),
        surface1: Color::Rgb(0x45, 0x47, 0x5a),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        red: Color::Rgb(0xf3, 0x8b, 0xa8),
        lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that change `HOME`.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every palette color that draws on the canvas stands out from the background.
    fn palette_colors_differ_from_base() {
        let th = theme();
        for c in [
            th.surface1,
            th.overlay1,
            th.text,
            th.subtext0,
            th.sapphire,
            th.mauve,
            th.yellow,
            th.red,
            th.lavender,
        ] {
            assert_ne!(c, th.base);
            assert_ne!(c, th.mantle);
        }
    }
}
