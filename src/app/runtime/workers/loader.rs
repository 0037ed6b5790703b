use tokio::sync::mpsc;

use crate::app::runtime::channels::LoadOutcome;
use crate::sources::NewsClient;
use crate::state::LoadRequest;

/// What: Spawn the load worker that answers every `LoadRequest` with a fetch.
///
/// Inputs:
/// - `client`: Backend client
/// - `req_rx`: Load requests from the controller
/// - `res_tx`: Channel for outcomes back to the event loop
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Each request runs in its own task, so loads may overlap; outcomes are sent
///   in completion order and the event loop applies them as they arrive.
/// - Exits when the request channel closes.
pub fn spawn_load_worker(
    client: NewsClient,
    mut req_rx: mpsc::UnboundedReceiver<LoadRequest>,
    res_tx: mpsc::UnboundedSender<LoadOutcome>,
) {
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            tracing::debug!(
                endpoint = request.endpoint.path(),
                silent = request.silent,
                trigger = ?request.trigger,
                "load requested"
            );
            let client = client.clone();
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let outcome = client.fetch(request.endpoint).await;
                let _ = res_tx.send((request, outcome));
            });
        }
        tracing::debug!("load worker stopped");
    });
}
