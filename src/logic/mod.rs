//! Core non-UI logic: filtering, applying load results and refresh orchestration.

pub mod filter;
pub mod load;
pub mod refresh;

pub use filter::{cycle_filter, filter_articles, filter_options, related_articles, set_filter};
pub use load::{apply_load_outcome, apply_snapshot};
pub use refresh::{
    RefreshSenders, ReconnectBackoff, on_poll_tick, on_push_message, request_manual_refresh,
    resolve_poll_minutes, resolve_refresh_mode, retry_load, start_visible_load,
};
