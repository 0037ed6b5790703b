//! Error type for backend calls and push payloads.

use thiserror::Error;

/// What: Failure kinds of the news client.
///
/// Details:
/// - `Network`, `Decode` and `Application` end up in the Error UI state with their
///   display text.
/// - `MalformedPush` and `Stream` are recovered inside the push worker and never
///   reach the user.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The body was not the expected JSON document.
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
    /// The server answered `success: false` (or an HTTP error without a usable body).
    #[error("{0}")]
    Application(String),
    /// A push event payload was not valid JSON.
    #[error("malformed push payload: {0}")]
    MalformedPush(String),
    /// The event stream could not be opened or ended.
    #[error("event stream: {0}")]
    Stream(String),
}

/// Result alias for news client operations.
pub type Result<T> = std::result::Result<T, NewsError>;
