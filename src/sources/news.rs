//! Decoding of the `/api/news` and `/api/refresh` payloads.

use serde::{Deserialize, Deserializer};

use super::{NewsError, Result};
use crate::state::{Article, ArticleId, LoadEndpoint, NewsSnapshot};

/// What: Treat a JSON `null` like a missing string.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One article as sent by the server.
///
/// The server also sends `id` and `created_at`; identity is assigned locally so
/// those are not read.
#[derive(Debug, Deserialize)]
struct WireArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    summary: String,
    #[serde(default)]
    ai_summary: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    time: String,
    #[serde(default)]
    url: Option<String>,
}

/// Envelope shared by both list endpoints.
#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<WireArticle>>,
    #[serde(default)]
    last_update: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    count: Option<usize>,
}

/// What: Drop empty strings so optional fields behave as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// What: Generic failure text used when the server gives no message.
#[must_use]
pub const fn generic_failure(endpoint: LoadEndpoint) -> &'static str {
    match endpoint {
        LoadEndpoint::News => "Failed to fetch news",
        LoadEndpoint::Refresh => "Failed to refresh news",
    }
}

/// What: Convert a decoded envelope into a snapshot or an application error.
///
/// Details:
/// - Ids are the 1-based position in server order.
/// - `last_update` wins over `timestamp`.
fn into_snapshot(envelope: NewsEnvelope, endpoint: LoadEndpoint) -> Result<NewsSnapshot> {
    if !envelope.success {
        let message = non_empty(envelope.error)
            .unwrap_or_else(|| generic_failure(endpoint).to_string());
        return Err(NewsError::Application(message));
    }
    let articles = envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, w)| Article {
            id: ArticleId(i + 1),
            title: w.title,
            category: w.category,
            summary: w.summary,
            ai_summary: non_empty(w.ai_summary),
            source: non_empty(w.source),
            time: w.time,
            url: non_empty(w.url),
        })
        .collect();
    Ok(NewsSnapshot {
        articles,
        last_update: non_empty(envelope.last_update).or_else(|| non_empty(envelope.timestamp)),
        count: envelope.count,
    })
}

/// What: Parse a response body from one of the list endpoints.
///
/// Inputs:
/// - `body`: Raw response text
/// - `endpoint`: Endpoint the body came from (selects the generic error text)
///
/// Output:
/// - `Ok(NewsSnapshot)` for `success: true`.
///
/// # Errors
/// - `NewsError::Application` for `success: false`, carrying the server message or a
///   generic one.
/// - `NewsError::Decode` when the body is not the expected JSON.
pub fn parse_news_body(body: &str, endpoint: LoadEndpoint) -> Result<NewsSnapshot> {
    let envelope: NewsEnvelope = serde_json::from_str(body)?;
    into_snapshot(envelope, endpoint)
}
