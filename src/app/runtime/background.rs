use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::logic::ReconnectBackoff;
use crate::sources::NewsClient;

use super::channels::Channels;
use super::init::RunConfig;
use super::workers::{auxiliary, loader, stream};

/// What: Spawn every background worker for one run.
///
/// Inputs:
/// - `headless`: When `true`, the UI tick worker is skipped
/// - `config`: Effective configuration
/// - `client`: Backend client shared by the load and stream workers
/// - `channels`: Runtime channels; the request receivers are moved into the workers
///
/// Output:
/// - None (spawns async tasks)
///
/// Details:
/// - The push stream worker is only started when the stream is enabled.
pub fn spawn_workers(
    headless: bool,
    config: &RunConfig,
    client: &NewsClient,
    channels: &mut Channels,
) {
    if let Some(req_rx) = channels.load_req_rx.take() {
        loader::spawn_load_worker(client.clone(), req_rx, channels.load_res_tx.clone());
    }
    if let Some(req_rx) = channels.simulated_req_rx.take() {
        auxiliary::spawn_simulated_refresh_worker(
            config.simulated_refresh,
            req_rx,
            channels.simulated_done_tx.clone(),
        );
    }
    auxiliary::spawn_poll_worker(config.poll_minutes, &channels.poll_tx);
    if config.stream_enabled {
        stream::spawn_stream_worker(
            client.clone(),
            channels.push_tx.clone(),
            ReconnectBackoff::new(config.backoff_base, config.backoff_max),
        );
    } else {
        tracing::info!("push stream disabled");
    }
    if !headless {
        auxiliary::spawn_tick_worker(&channels.tick_tx);
    }
}

/// What: Spawn the thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel for terminal events
/// - `event_thread_cancelled`: Set on exit to stop the thread
///
/// Output:
/// - None (spawns an OS thread)
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
/// - Read errors are transient and ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
