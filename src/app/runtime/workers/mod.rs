/// Tick, poll and simulated refresh timers.
pub mod auxiliary;
/// Article list fetching worker.
pub mod loader;
/// Push event stream worker with reconnect backoff.
pub mod stream;
