//! Terminal runtime: workers, channels and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::init::{CliOverrides, RunConfig};
pub use runtime::{HEADLESS_ENV, run};
