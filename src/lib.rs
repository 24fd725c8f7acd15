//! Content façade servers.
//!
//! Two independently runnable HTTP servers sharing one library:
//!
//! - `asset-server` serves a prebuilt single-page application from a build
//!   directory, with SPA routing fallback and permissive CORS headers.
//! - `api-server` answers a health route and a small set of content
//!   endpoints with synthetically generated placeholder JSON, falling back
//!   to the same asset directory for unmatched GET requests.
//!
//! Neither server performs real content generation: responses are filled
//! from string templates so a frontend can be exercised without any model
//! backend.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
