//! Server-sent event decoding for the push channel.

use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;

use super::{NewsError, Result};

/// Event type announcing that the backend finished a refresh.
pub const NEWS_UPDATED: &str = "news_updated";

/// Longest line kept; longer lines are dropped whole.
const MAX_LINE_BYTES: usize = 64 * 1024;
/// Largest event payload kept; larger events are dropped whole.
const MAX_EVENT_BYTES: usize = 256 * 1024;

/// Incremental decoder for a `text/event-stream` body.
///
/// Feed it raw chunks as they arrive; it returns the `data` payload of every event
/// completed by that chunk. Only the `data` field is used; `event`, `id`, `retry`
/// and comment lines are skipped.
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of an incomplete trailing line.
    pending: Vec<u8>,
    /// The current line exceeded `MAX_LINE_BYTES`; ignore it up to its end.
    line_overflow: bool,
    /// The previous line ended with `\r`; a following `\n` belongs to it.
    after_cr: bool,
    /// `data` lines collected for the event being built.
    data_lines: Vec<String>,
    /// Bytes held in `data_lines`.
    data_bytes: usize,
    /// The current event exceeded `MAX_EVENT_BYTES`; drop it at its end.
    event_overflow: bool,
}

impl SseDecoder {
    /// What: Feed a chunk and collect finished event payloads.
    ///
    /// Inputs:
    /// - `chunk`: Next bytes of the body (may split lines or UTF-8 sequences anywhere)
    ///
    /// Output:
    /// - Data payloads of events terminated inside this chunk, in order.
    ///
    /// Details:
    /// - Lines end with `\n`, `\r\n` or a lone `\r`; multiple `data` lines join with `\n`.
    /// - An event with no `data` line is dropped.
    /// - Memory is bounded: oversized lines and events are discarded.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut events = Vec::new();
        for &b in chunk {
            if std::mem::take(&mut self.after_cr) && b == b'\n' {
                continue;
            }
            match b {
                b'\n' | b'\r' => {
                    self.after_cr = b == b'\r';
                    if let Some(data) = self.finish_line() {
                        events.push(data);
                    }
                }
                _ if self.line_overflow => {}
                _ if self.pending.len() >= MAX_LINE_BYTES => {
                    tracing::warn!(limit = MAX_LINE_BYTES, "event stream line too long; dropped");
                    self.pending.clear();
                    self.line_overflow = true;
                }
                _ => self.pending.push(b),
            }
        }
        events
    }

    /// What: Take the buffered line and apply it.
    fn finish_line(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.pending);
        if std::mem::take(&mut self.line_overflow) {
            return None;
        }
        let line = String::from_utf8_lossy(&line);
        self.process_line(&line)
    }

    /// What: Apply one complete line; returns a payload when the line ends an event.
    fn process_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            let lines = std::mem::take(&mut self.data_lines);
            self.data_bytes = 0;
            if std::mem::take(&mut self.event_overflow) || lines.is_empty() {
                return None;
            }
            return Some(lines.join("\n"));
        }
        if line.starts_with(':') || self.event_overflow {
            return None;
        }
        let (field, value) = line.split_once(':').unwrap_or((line, ""));
        if field == "data" {
            let value = value.strip_prefix(' ').unwrap_or(value);
            self.data_bytes += value.len() + 1;
            if self.data_bytes > MAX_EVENT_BYTES {
                tracing::warn!(limit = MAX_EVENT_BYTES, "event stream payload too large; dropped");
                self.data_lines.clear();
                self.data_bytes = 0;
                self.event_overflow = true;
                return None;
            }
            self.data_lines.push(value.to_string());
        }
        None
    }
}

/// Push notification after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// The backend has new articles; reload now.
    NewsUpdated,
    /// Any other event type (or none); ignored.
    Other(String),
}

/// JSON shape of a push payload.
#[derive(Debug, Deserialize)]
struct PushPayload {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// What: Decode one event payload.
///
/// Inputs:
/// - `data`: Event `data` text
///
/// Output:
/// - `PushEvent::NewsUpdated` for `{"type":"news_updated"}`, `PushEvent::Other` for any
///   other object (an empty payload counts as `{}`).
///
/// # Errors
/// - `NewsError::MalformedPush` when the payload is not a JSON object.
pub fn parse_push_payload(data: &str) -> Result<PushEvent> {
    let text = if data.trim().is_empty() { "{}" } else { data };
    let payload: PushPayload =
        serde_json::from_str(text).map_err(|e| NewsError::MalformedPush(e.to_string()))?;
    match payload.kind.as_deref() {
        Some(NEWS_UPDATED) => Ok(PushEvent::NewsUpdated),
        other => Ok(PushEvent::Other(other.unwrap_or_default().to_string())),
    }
}

/// How a stream read ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The server closed the body; reconnect.
    Ended,
    /// Nobody is listening any more; stop the worker.
    ReceiverClosed,
}

/// What: Forward every event payload of an open stream to `tx`.
///
/// Inputs:
/// - `response`: Response from [`super::NewsClient::open_stream`]
/// - `tx`: Channel to the event loop
///
/// Output:
/// - `StreamOutcome::Ended` when the body ends, `StreamOutcome::ReceiverClosed` when the
///   channel is closed.
///
/// # Errors
/// - `NewsError::Network` when reading the body fails mid-stream.
pub async fn pump_events(
    response: reqwest::Response,
    tx: &mpsc::UnboundedSender<String>,
) -> Result<StreamOutcome> {
    let mut body = response.bytes_stream();
    let mut decoder = SseDecoder::default();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        for data in decoder.push(&chunk) {
            if tx.send(data).is_err() {
                return Ok(StreamOutcome::ReceiverClosed);
            }
        }
    }
    Ok(StreamOutcome::Ended)
}
