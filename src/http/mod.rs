//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by both servers: MIME detection,
//! CORS header sets, conditional-request handling, and response builders.
//! Nothing in here knows about routes or payload semantics.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_file_response, build_preflight_response, build_text_response,
};
