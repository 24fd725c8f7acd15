// Signal handling module
//
// Both servers run until interrupted: SIGTERM and SIGINT (Ctrl+C) trigger
// the shutdown notification watched by the accept loop.

use std::sync::Arc;
use tokio::sync::Notify;

/// Start the shutdown signal listener (Unix)
#[cfg(unix)]
pub fn install_shutdown_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            crate::logger::log_error("Failed to register SIGTERM handler");
            return;
        };
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            crate::logger::log_error("Failed to register SIGINT handler");
            return;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                crate::logger::log_warning("SIGTERM received, shutting down");
            }
            _ = sigint.recv() => {
                crate::logger::log_warning("SIGINT received, shutting down");
            }
        }

        shutdown.notify_waiters();
    });
}

/// Start the shutdown signal listener (non-Unix: Ctrl+C only)
#[cfg(not(unix))]
pub fn install_shutdown_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            crate::logger::log_warning("Ctrl+C received, shutting down");
            shutdown.notify_waiters();
        }
    });
}
