use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::start_visible_load;
use crate::sources::NewsClient;
use crate::state::{AppState, LoadTrigger};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
pub mod init;
mod workers;

use background::{spawn_event_thread, spawn_workers};
use channels::Channels;
use event_loop::run_event_loop;
use init::{RunConfig, initialize_app_state};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup (used by the runtime smoke test).
pub const HEADLESS_ENV: &str = "NEWSDECK_TEST_HEADLESS";

/// What: Run the dashboard end-to-end: set up the terminal, start the workers, load the
/// articles, drive the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `config`: Effective configuration (settings merged with command-line flags)
///
/// Output:
/// - `Ok(())` when the user quits; `Err` when the client or terminal cannot be set up.
///
/// Details:
/// - With `NEWSDECK_TEST_HEADLESS=1` no terminal is touched and nothing is drawn.
/// - The first load targets `/api/news` and shows the loading state.
/// - Network failures never end the run; they show up in the error state.
pub async fn run(config: RunConfig) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let client = NewsClient::new(&config.server_url)?;

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, &config);

    let mut channels = Channels::new();
    spawn_workers(headless, &config, &client, &mut channels);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let senders = channels.refresh_senders();
    start_visible_load(&mut app, &senders, LoadTrigger::Startup);

    run_event_loop(&mut terminal, &mut app, &mut channels, &senders).await;

    tracing::debug!("[Runtime] Main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
