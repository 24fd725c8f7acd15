// Accept loop module
// Runs a server until its shutdown notification fires

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::ServerRole;
use crate::config::AppState;
use crate::logger;

/// Accept connections until shutdown is requested.
///
/// Connections already being served finish on their own tasks; the loop
/// only stops taking new ones.
pub async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    role: ServerRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let shutdown = Arc::clone(&state.shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            role,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown(role.name());
                return Ok(());
            }
        }
    }
}
