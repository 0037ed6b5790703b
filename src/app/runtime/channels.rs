use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::logic::RefreshSenders;
use crate::sources::NewsError;
use crate::state::{LoadRequest, NewsSnapshot};

/// Outcome of one load, paired with the request it answers.
pub type LoadOutcome = (LoadRequest, Result<NewsSnapshot, NewsError>);

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers.
/// - Receivers of worker requests are taken out with `Option::take` when the
///   workers are spawned.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub load_req_tx: mpsc::UnboundedSender<LoadRequest>,
    pub load_req_rx: Option<mpsc::UnboundedReceiver<LoadRequest>>,
    pub load_res_tx: mpsc::UnboundedSender<LoadOutcome>,
    pub load_res_rx: mpsc::UnboundedReceiver<LoadOutcome>,
    pub simulated_req_tx: mpsc::UnboundedSender<()>,
    pub simulated_req_rx: Option<mpsc::UnboundedReceiver<()>>,
    pub simulated_done_tx: mpsc::UnboundedSender<()>,
    pub simulated_done_rx: mpsc::UnboundedReceiver<()>,
    pub poll_tx: mpsc::UnboundedSender<()>,
    pub poll_rx: mpsc::UnboundedReceiver<()>,
    pub push_tx: mpsc::UnboundedSender<String>,
    pub push_rx: mpsc::UnboundedReceiver<String>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels used for runtime communication.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (load_req_tx, load_req_rx) = mpsc::unbounded_channel::<LoadRequest>();
        let (load_res_tx, load_res_rx) = mpsc::unbounded_channel::<LoadOutcome>();
        let (simulated_req_tx, simulated_req_rx) = mpsc::unbounded_channel::<()>();
        let (simulated_done_tx, simulated_done_rx) = mpsc::unbounded_channel::<()>();
        let (poll_tx, poll_rx) = mpsc::unbounded_channel::<()>();
        let (push_tx, push_rx) = mpsc::unbounded_channel::<String>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            load_req_tx,
            load_req_rx: Some(load_req_rx),
            load_res_tx,
            load_res_rx,
            simulated_req_tx,
            simulated_req_rx: Some(simulated_req_rx),
            simulated_done_tx,
            simulated_done_rx,
            poll_tx,
            poll_rx,
            push_tx,
            push_rx,
            tick_tx,
            tick_rx,
        }
    }

    /// What: Senders the controller logic uses to start loads and simulated refreshes.
    pub fn refresh_senders(&self) -> RefreshSenders {
        RefreshSenders {
            load_tx: self.load_req_tx.clone(),
            simulated_tx: self.simulated_req_tx.clone(),
        }
    }
}
