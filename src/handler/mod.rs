//! Request handler module
//!
//! Routing and file serving for the static asset server. The façade server
//! reuses `static_files` for its unmatched-GET fallback.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, RequestContext};
