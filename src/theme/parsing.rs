/// What: Strip a trailing inline comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - The value without `// ...` or ` # ...` tails, trimmed.
///
/// Details:
/// - `//` inside a URL scheme (`http://`) is kept.
/// - `#` only starts a comment when preceded by whitespace.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    let bytes = s.as_bytes();
    for (i, _) in s.match_indices("//") {
        if i == 0 || bytes[i - 1] != b':' {
            end = end.min(i);
            break;
        }
    }
    for (i, _) in s.match_indices('#') {
        if i > 0 && bytes[i - 1].is_ascii_whitespace() {
            end = end.min(i);
            break;
        }
    }
    s[..end].trim()
}

/// What: Interpret a config boolean.
///
/// Output:
/// - `Some(true)` for `true/1/yes/on`, `Some(false)` for `false/0/no/off`, else `None`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Normalize a config key: lowercase, with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
