//! Refresh orchestration: manual refresh, poll ticks, push events and the
//! simulated refresh mode.
//!
//! Every function here runs on the event loop and only touches `AppState` and
//! the request channels; the network work happens in the runtime workers.

use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::sources::{PushEvent, parse_push_payload};
use crate::state::{
    AppState, Article, LoadEndpoint, LoadRequest, LoadTrigger, RefreshMode, UiState,
};
use crate::util::format_local;

/// Senders the controller uses to start refresh work.
#[derive(Clone, Debug)]
pub struct RefreshSenders {
    /// Requests for the load worker.
    pub load_tx: mpsc::UnboundedSender<LoadRequest>,
    /// Starts the simulated-refresh delay.
    pub simulated_tx: mpsc::UnboundedSender<()>,
}

impl RefreshSenders {
    /// What: Queue a load request.
    ///
    /// Output:
    /// - `true` when the request was queued, `false` when the worker is gone.
    pub fn send_load(&self, endpoint: LoadEndpoint, silent: bool, trigger: LoadTrigger) -> bool {
        let request = LoadRequest {
            endpoint,
            silent,
            trigger,
        };
        if self.load_tx.send(request).is_err() {
            warn!(trigger = ?trigger, "load worker is gone; request dropped");
            return false;
        }
        true
    }
}

/// What: Pick the refresh mode from the command line and persisted settings.
///
/// Details:
/// - Either source enabling real refresh is enough.
#[must_use]
pub const fn resolve_refresh_mode(cli_dev: bool, settings_dev: bool) -> RefreshMode {
    if cli_dev || settings_dev {
        RefreshMode::Real
    } else {
        RefreshMode::Simulated
    }
}

/// What: Pick the poll period in minutes.
///
/// Inputs:
/// - `cli`: `--poll` value
/// - `settings`: persisted `poll_minutes`
///
/// Output:
/// - First positive value of `cli`, `settings`, else the default of 60.
#[must_use]
pub fn resolve_poll_minutes(cli: Option<u64>, settings: Option<u64>) -> u64 {
    cli.filter(|m| *m > 0)
        .or_else(|| settings.filter(|m| *m > 0))
        .unwrap_or(crate::theme::DEFAULT_POLL_MINUTES)
}

/// What: Rotate the list for a simulated refresh.
///
/// Details:
/// - Moves the first article to the end when there are at least two.
/// - Ids and contents stay untouched.
pub fn rotate_for_simulated_refresh(articles: &mut [Article]) {
    if articles.len() > 1 {
        articles.rotate_left(1);
    }
}

/// What: Start a visible load of `/api/news` (startup and retry).
///
/// Details:
/// - Enters `Loading` before sending so the spinner shows immediately.
pub fn start_visible_load(app: &mut AppState, senders: &RefreshSenders, trigger: LoadTrigger) {
    app.ui_state = UiState::Loading;
    senders.send_load(LoadEndpoint::News, false, trigger);
}

/// What: Retry after an error (the error banner's retry action).
///
/// Output:
/// - `true` when a load was started.
pub fn retry_load(app: &mut AppState, senders: &RefreshSenders) -> bool {
    if !matches!(app.ui_state, UiState::Error(_)) {
        return false;
    }
    info!("retrying news load after error");
    start_visible_load(app, senders, LoadTrigger::Manual);
    true
}

/// What: Handle the refresh button.
///
/// Inputs:
/// - `app`: Application state
/// - `senders`: Request channels
///
/// Output:
/// - `true` when a refresh started, `false` while one is already visible.
///
/// Details:
/// - Simulated mode: enter `Loading` and start the fixed delay; the list rotates when
///   it ends.
/// - Real mode: enter `Loading` and load from the refresh endpoint.
pub fn request_manual_refresh(app: &mut AppState, senders: &RefreshSenders) -> bool {
    if app.is_busy() {
        debug!("refresh ignored; a visible load is in progress");
        return false;
    }
    app.ui_state = UiState::Loading;
    match app.refresh_mode {
        RefreshMode::Simulated => {
            info!("simulated refresh started");
            if senders.simulated_tx.send(()).is_err() {
                warn!("simulated refresh worker is gone");
            }
        }
        RefreshMode::Real => {
            info!("real refresh started");
            senders.send_load(LoadEndpoint::Refresh, false, LoadTrigger::Manual);
        }
    }
    true
}

/// What: Finish a simulated refresh.
///
/// Details:
/// - Rotates the list, stamps the client clock and shows the grid again.
pub fn finish_simulated_refresh(app: &mut AppState) {
    rotate_for_simulated_refresh(&mut app.articles);
    app.last_update_label = format_local(&Local::now());
    app.ui_state = UiState::Loaded;
    app.clamp_selection();
    info!(articles = app.articles.len(), "simulated refresh finished");
}

/// What: Handle a poll timer tick.
///
/// Output:
/// - `true` when a silent load was requested.
///
/// Details:
/// - Skipped while the terminal is unfocused; skipped ticks are not caught up.
pub fn on_poll_tick(app: &AppState, senders: &RefreshSenders) -> bool {
    if !app.terminal_focused {
        debug!("poll tick skipped; terminal not focused");
        return false;
    }
    senders.send_load(LoadEndpoint::News, true, LoadTrigger::Poll)
}

/// What: Handle one push event payload.
///
/// Output:
/// - `true` when a silent load was requested.
///
/// Details:
/// - Only `{"type":"news_updated"}` triggers a load; other types and malformed
///   payloads are logged and dropped.
pub fn on_push_message(data: &str, senders: &RefreshSenders) -> bool {
    match parse_push_payload(data) {
        Ok(PushEvent::NewsUpdated) => {
            info!("push: news updated");
            senders.send_load(LoadEndpoint::News, true, LoadTrigger::Push)
        }
        Ok(PushEvent::Other(kind)) => {
            debug!(kind = %kind, "push event ignored");
            false
        }
        Err(e) => {
            debug!(error = %e, "push payload dropped");
            false
        }
    }
}

/// Capped exponential delay for push-channel reconnects.
#[derive(Clone, Debug)]
pub struct ReconnectBackoff {
    /// First delay and the value restored by `reset`.
    base: Duration,
    /// Upper bound for any delay.
    max: Duration,
    /// Delay returned by the next call to `next_delay`.
    current: Duration,
}

impl ReconnectBackoff {
    /// What: Create a backoff starting at `base` and never exceeding `max`.
    ///
    /// Details:
    /// - A `max` below `base` is raised to `base`.
    #[must_use]
    pub fn new(base: Duration, max: Duration) -> Self {
        Self {
            base,
            max: max.max(base),
            current: base,
        }
    }

    /// What: Delay to wait before the next attempt; doubles the following one up to the cap.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = self.current.saturating_mul(2).min(self.max);
        delay
    }

    /// What: Return to the base delay after a successful connection.
    pub const fn reset(&mut self) {
        self.current = self.base;
    }
}
