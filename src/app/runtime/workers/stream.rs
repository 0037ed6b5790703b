use rand::RngExt;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use crate::logic::ReconnectBackoff;
use crate::sources::{NewsClient, STREAM_PATH, StreamOutcome, pump_events};

/// Upper bound of the random delay added to each reconnect wait.
const JITTER_MAX_MS: u64 = 500;

/// What: Spawn the push stream worker.
///
/// Inputs:
/// - `client`: Backend client
/// - `push_tx`: Channel for raw event payloads
/// - `backoff`: Reconnect delay policy
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Connects to the event stream and forwards every payload.
/// - On a failed connect, a read error or the end of the stream, waits for the next
///   backoff delay plus jitter and reconnects, forever.
/// - A successful connect resets the backoff.
/// - Stops once the event loop has dropped the receiver.
pub fn spawn_stream_worker(
    client: NewsClient,
    push_tx: mpsc::UnboundedSender<String>,
    mut backoff: ReconnectBackoff,
) {
    tokio::spawn(async move {
        loop {
            match client.open_stream().await {
                Ok(response) => {
                    tracing::info!(
                        url = %client.url_for(STREAM_PATH),
                        "push stream connected"
                    );
                    backoff.reset();
                    match pump_events(response, &push_tx).await {
                        Ok(StreamOutcome::ReceiverClosed) => break,
                        Ok(StreamOutcome::Ended) => tracing::info!("push stream ended by server"),
                        Err(e) => tracing::warn!(error = %e, "push stream read failed"),
                    }
                }
                Err(e) => tracing::warn!(error = %e, "push stream connect failed"),
            }
            if push_tx.is_closed() {
                break;
            }
            let jitter_ms = rand::rng().random_range(0..=JITTER_MAX_MS);
            let delay = backoff.next_delay() + Duration::from_millis(jitter_ms);
            tracing::debug!(delay_ms = delay.as_millis(), "push stream reconnect scheduled");
            sleep(delay).await;
        }
        tracing::debug!("push stream worker stopped");
    });
}
