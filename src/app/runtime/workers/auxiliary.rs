use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior, sleep};

/// Interval between UI ticks driving the spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Spawns tick worker that sends tick events every 200ms.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Output:
/// - None (spawns async task)
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawns the poll worker that fires every `minutes` minutes.
///
/// Inputs:
/// - `minutes`: Poll period (positive)
/// - `poll_tx`: Channel sender for poll ticks
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Skips the immediate first tick; the startup load covers it.
/// - Missed ticks are skipped, never bunched up.
pub fn spawn_poll_worker(minutes: u64, poll_tx: &mpsc::UnboundedSender<()>) {
    let poll_tx = poll_tx.clone();
    let period = Duration::from_secs(minutes.max(1).saturating_mul(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("poll tick");
            if poll_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawns the simulated refresh worker.
///
/// Inputs:
/// - `delay`: How long the loading state is shown
/// - `req_rx`: Start signals from the controller
/// - `done_tx`: Completion signals back to the event loop
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Each start signal produces exactly one completion after `delay`.
pub fn spawn_simulated_refresh_worker(
    delay: Duration,
    mut req_rx: mpsc::UnboundedReceiver<()>,
    done_tx: mpsc::UnboundedSender<()>,
) {
    tokio::spawn(async move {
        while req_rx.recv().await.is_some() {
            let done_tx = done_tx.clone();
            tokio::spawn(async move {
                sleep(delay).await;
                let _ = done_tx.send(());
            });
        }
    });
}
