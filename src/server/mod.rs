// Server module entry point
// Listener creation, accept loop, connection handling, and shutdown signals

pub mod accept;
pub mod connection;
pub mod listener;
pub mod signal;

// Re-export commonly used items
pub use accept::run_accept_loop;
pub use listener::create_reusable_listener;

/// Which request handler a server instance runs behind its accept loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerRole {
    /// Static asset server: files + SPA fallback only
    Assets,
    /// API façade server: content routes with asset fallback
    Facade,
}

impl ServerRole {
    /// Human-readable name used in lifecycle log lines
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assets => "Asset server",
            Self::Facade => "API facade server",
        }
    }
}

/// Build the Tokio runtime, honoring the configured worker count
pub fn build_runtime(workers: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = workers {
        builder.worker_threads(workers);
    }
    builder.build()
}
