use ratatui::Terminal;
use tokio::select;

use crate::logic::refresh::finish_simulated_refresh;
use crate::logic::{RefreshSenders, apply_load_outcome, on_poll_tick, on_push_message};
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Advance the spinner while a visible load is in progress.
fn handle_tick(app: &mut AppState) {
    if app.is_busy() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
/// - `senders`: Request channels handed to the controller logic
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel.
/// - Load outcomes are applied in arrival order.
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    senders: &RefreshSenders,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, senders)
        }
        Some((request, outcome)) = channels.load_res_rx.recv() => {
            apply_load_outcome(app, request, outcome);
            false
        }
        Some(()) = channels.simulated_done_rx.recv() => {
            finish_simulated_refresh(app);
            false
        }
        Some(()) = channels.poll_rx.recv() => {
            on_poll_tick(app, senders);
            false
        }
        Some(data) = channels.push_rx.recv() => {
            on_push_message(&data, senders);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => false
    }
}

/// What: Draw and dispatch until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw on; `None` in headless mode
/// - `app`: Application state
/// - `channels`: Runtime channels
/// - `senders`: Request channels handed to the controller logic
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
    senders: &RefreshSenders,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels, senders).await {
            break;
        }
    }
}
