//! Small utility helpers for time formatting, text fitting and URL opening.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display format of the update-time label.
pub const LABEL_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// What: Format an instant in the local timezone for the update label.
#[must_use]
pub fn format_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Local).format(LABEL_FORMAT).to_string()
}

/// What: Turn a server timestamp into the update label text.
///
/// Inputs:
/// - `raw`: Server `last_update`/`timestamp`, if any
/// - `now`: Client clock, used when `raw` is absent or blank
///
/// Output:
/// - Local `YYYY/MM/DD HH:MM:SS` text.
///
/// Details:
/// - RFC 3339 values are converted to local time.
/// - Naive `YYYY-MM-DD HH:MM:SS` values (what the backend sends) are taken as local time.
/// - Any other non-empty value is shown unchanged.
#[must_use]
pub fn format_update_time(raw: Option<&str>, now: DateTime<Local>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return format_local(&now);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return format_local(&dt);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt)
            && let Some(local) = Local.from_local_datetime(&naive).earliest()
        {
            return format_local(&local);
        }
    }
    raw.to_string()
}

/// What: Cut `text` to at most `max_width` terminal columns, adding `…` when cut.
///
/// Inputs:
/// - `text`: Text to fit
/// - `max_width`: Available columns
///
/// Output:
/// - `text` unchanged when it fits, otherwise a prefix plus `…` within `max_width`.
///
/// Details:
/// - Uses display width, so CJK characters count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Open a URL in the default browser without blocking the UI.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems, tries `xdg-open` then `open`.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let spawned = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
                if let Err(e) = spawned {
                    tracing::warn!(url = %url, error = %e, "failed to open url");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: RFC 3339 timestamps render as the same instant in local time.
    fn rfc3339_is_converted_to_local() {
        let now = Local::now();
        let expected = format_local(
            &DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").expect("valid rfc3339"),
        );
        assert_eq!(
            format_update_time(Some("2024-01-01T00:00:00Z"), now),
            expected
        );
    }

    #[test]
    /// What: Naive backend timestamps are taken as local wall time.
    fn naive_backend_format_keeps_wall_time() {
        let now = Local::now();
        assert_eq!(
            format_update_time(Some("2024-05-01 10:20:30"), now),
            "2024/05/01 10:20:30"
        );
    }

    #[test]
    /// What: Missing or blank timestamps fall back to the client clock; junk passes through.
    fn fallback_and_passthrough() {
        let now = Local
            .with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_update_time(None, now), "2025/03/04 05:06:07");
        assert_eq!(format_update_time(Some("  "), now), "2025/03/04 05:06:07");
        assert_eq!(format_update_time(Some("yesterday"), now), "yesterday");
    }

    #[test]
    /// What: Truncation respects display width including wide characters.
    fn truncate_counts_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("人工智能新闻", 5), "人工…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
