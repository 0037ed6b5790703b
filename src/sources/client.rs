//! HTTP client for the news backend.

use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderValue};
use tracing::debug;

use super::news::parse_news_body;
use super::{NewsError, Result};
use crate::state::{LoadEndpoint, NewsSnapshot};

/// Path of the push event stream relative to the server base URL.
pub const STREAM_PATH: &str = "/api/stream";

/// What: Build the user agent sent with every request.
fn user_agent() -> String {
    format!("newsdeck/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for the list endpoints and the event stream of one backend.
///
/// Cheap to clone; both inner `reqwest::Client`s share their connection pools.
#[derive(Clone, Debug)]
pub struct NewsClient {
    /// Client for short JSON requests (connect and total timeouts).
    http: reqwest::Client,
    /// Client for the long-lived event stream (connect timeout only).
    stream_http: reqwest::Client,
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:5000`.
    base_url: String,
}

impl NewsClient {
    /// What: Create a client for the backend at `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Scheme, host and optional port; a trailing slash is ignored.
    ///
    /// Output:
    /// - Ready client.
    ///
    /// # Errors
    /// - `NewsError::Network` when the TLS backend cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent())
            .build()?;
        // The stream stays open indefinitely, so no total timeout here.
        let stream_http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent())
            .build()?;
        Ok(Self {
            http,
            stream_http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// What: Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: Absolute URL for a backend path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// What: Fetch the article list from `endpoint`.
    ///
    /// Inputs:
    /// - `endpoint`: `/api/news` or `/api/refresh`
    ///
    /// Output:
    /// - Parsed snapshot on `success: true`.
    ///
    /// # Errors
    /// - `NewsError::Network` when the request fails or the body cannot be read.
    /// - `NewsError::Application` for `success: false`, or for an HTTP error status
    ///   whose body is not the expected JSON.
    /// - `NewsError::Decode` for a 2xx body that is not the expected JSON.
    ///
    /// Details:
    /// - The body decides success; a 500 carrying `{success:false,error}` surfaces the
    ///   server's message.
    pub async fn fetch(&self, endpoint: LoadEndpoint) -> Result<NewsSnapshot> {
        let url = self.url_for(endpoint.path());
        debug!(url = %url, "requesting article list");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        match parse_news_body(&body, endpoint) {
            Err(NewsError::Decode(e)) if !status.is_success() => {
                debug!(status = %status, error = %e, "error status with undecodable body");
                Err(NewsError::Application(format!(
                    "Server returned HTTP {}",
                    status.as_u16()
                )))
            }
            other => other,
        }
    }

    /// What: Open the push event stream.
    ///
    /// Output:
    /// - The streaming response; read it with [`super::pump_events`].
    ///
    /// # Errors
    /// - `NewsError::Network` when the connection fails.
    /// - `NewsError::Stream` for a non-success status.
    pub async fn open_stream(&self) -> Result<reqwest::Response> {
        let url = self.url_for(STREAM_PATH);
        let response = self
            .stream_http
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("text/event-stream"))
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Stream(format!("HTTP {}", status.as_u16())));
        }
        Ok(response)
    }
}
