// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AssetsConfig, Config, FacadeConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the specified file path (without extension)
    ///
    /// Sources are layered: coded defaults, then an optional config file,
    /// then `SERVER_`-prefixed environment variables. Both servers default
    /// to the same port on purpose: they stand in for each other and are
    /// not meant to run side by side on one host.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3001)?
            .set_default("assets.root", "client/build")?
            .set_default("assets.index_file", "index.html")?
            .set_default("assets.spa_fallback", true)?
            .set_default("http.server_name", "content-facade/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("facade.service_name", "Content Architect Frontend")?
            .set_default("facade.generation_delay_ms", 1500)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.port, 3001);
        assert_eq!(cfg.assets.root, "client/build");
        assert_eq!(cfg.assets.index_file, "index.html");
        assert!(cfg.assets.spa_fallback);
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.facade.generation_delay_ms, 1500);
        assert_eq!(cfg.facade.service_name, "Content Architect Frontend");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        let addr = cfg.socket_addr().expect("default addr should parse");
        assert_eq!(addr.port(), 3001);
        assert!(addr.is_ipv4());
    }
}
