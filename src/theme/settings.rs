use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::parsing::{normalize_key, parse_bool, strip_inline_comment};
use super::types::Settings;

/// Commented `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# newsdeck settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Command-line flags override these values.\n\
#\n\
# Backend base URL\n\
# server_url = http://127.0.0.1:5000\n\
#\n\
# Minutes between background reloads (0 or unset = 60)\n\
poll_minutes = 60\n\
#\n\
# true: the refresh key calls /api/refresh; false: simulated refresh\n\
dev_real_refresh = false\n\
#\n\
# Listen to /api/stream for update notifications\n\
stream_enabled = true\n\
#\n\
# Seconds the simulated refresh shows the loading state\n\
simulated_refresh_secs = 10\n\
#\n\
# Push reconnect delay: first attempt and upper bound, in seconds\n\
stream_backoff_base_secs = 5\n\
stream_backoff_max_secs = 60\n\
#\n\
# Filter chips always offered, comma-separated\n\
categories = 技术突破, 产品发布, 行业动态, 投资融资, 政策法规\n";

/// What: Apply `settings.conf` content on top of `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - Unknown keys and unparsable values are logged and skipped.
/// - Values of zero for the delay keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(raw_val.trim());
        let applied = match key.as_str() {
            "server_url" | "server" => {
                settings.server_url = (!val.is_empty()).then(|| val.to_string());
                true
            }
            "poll_minutes" | "poll" => val
                .parse::<u64>()
                .map(|v| settings.poll_minutes = Some(v))
                .is_ok(),
            "dev_real_refresh" | "dev" => parse_bool(val)
                .map(|v| settings.dev_real_refresh = v)
                .is_some(),
            "stream_enabled" | "stream" => parse_bool(val)
                .map(|v| settings.stream_enabled = v)
                .is_some(),
            "simulated_refresh_secs" => set_positive(val, &mut settings.simulated_refresh_secs),
            "stream_backoff_base_secs" => {
                set_positive(val, &mut settings.stream_backoff_base_secs)
            }
            "stream_backoff_max_secs" => set_positive(val, &mut settings.stream_backoff_max_secs),
            "categories" => {
                settings.categories = val
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                true
            }
            _ => {
                debug!(key = %key, "[Config] unknown settings key ignored");
                continue;
            }
        };
        if !applied {
            warn!(key = %key, value = %val, "[Config] invalid settings value ignored");
        }
    }
}

/// What: Store `val` in `slot` when it parses as a positive integer.
fn set_positive(val: &str, slot: &mut u64) -> bool {
    match val.parse::<u64>() {
        Ok(v) if v > 0 => {
            *slot = v;
            true
        }
        _ => false,
    }
}

/// What: Read settings from `path`, writing the skeleton first when the file is missing.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => debug!(path = %path.display(), "[Config] wrote settings skeleton"),
            Err(e) => warn!(path = %path.display(), error = %e, "[Config] could not write settings skeleton"),
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "[Config] settings.conf unreadable, using defaults"
        ),
    }
    out
}

/// What: Load settings from the default `settings.conf` location.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&super::paths::settings_path())
}
