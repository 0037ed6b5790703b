//! Backend access: the JSON news endpoints and the push event stream.

mod client;
pub mod error;
pub mod news;
pub mod stream;

pub use client::{NewsClient, STREAM_PATH};
pub use error::{NewsError, Result};
pub use news::parse_news_body;
pub use stream::{PushEvent, SseDecoder, StreamOutcome, parse_push_payload, pump_events};
