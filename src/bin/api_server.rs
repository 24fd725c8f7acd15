//! API façade server binary.
//!
//! Answers the health route and the content endpoints with synthesized
//! placeholder JSON, and falls back to the asset directory for unmatched
//! GET requests. Starts even when the asset root is missing, since the
//! content routes do not depend on it.

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

    if !Path::new(&cfg.assets.root).is_dir() {
        logger::log_warning(&format!(
            "Asset directory not found: {} (static fallback will 404)",
            cfg.assets.root
        ));
    }

    let runtime = server::build_runtime(cfg.server.workers)?;
    runtime.block_on(run(cfg))
}

async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(cfg));
    server::signal::install_shutdown_handler(Arc::clone(&state.shutdown));
    logger::log_server_start(ServerRole::Facade.name(), &addr, &state.config);

    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_accept_loop(listener, state, ServerRole::Facade))
        .await
}
