// Application state module
// Immutable per-process state shared across connection tasks

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Shared application state
///
/// Configuration is fixed for the lifetime of the process; the only
/// cross-request coordination is the shutdown notification used by the
/// accept loop.
pub struct AppState {
    pub config: Config,
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: Arc::new(Notify::new()),
        }
    }
}
