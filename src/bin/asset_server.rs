//! Static asset server binary.
//!
//! Serves the prebuilt frontend from the configured asset root with SPA
//! routing fallback and permissive CORS headers. Refuses to start when the
//! asset root is missing.

use std::path::Path;
use std::sync::Arc;

use content_facade::config::{AppState, Config};
use content_facade::logger;
use content_facade::server::{self, ServerRole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Without its root the asset server can serve nothing; fail before
    // binding the socket
    if !Path::new(&cfg.assets.root).is_dir() {
        logger::log_error(&format!("Asset directory not found: {}", cfg.assets.root));
        std::process::exit(1);
    }

    let runtime = server::build_runtime(cfg.server.workers)?;
    runtime.block_on(run(cfg))
}

async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(cfg));
    server::signal::install_shutdown_handler(Arc::clone(&state.shutdown));
    logger::log_server_start(ServerRole::Assets.name(), &addr, &state.config);

    // LocalSet for spawn_local-based connection tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_accept_loop(listener, state, ServerRole::Assets))
        .await
}
