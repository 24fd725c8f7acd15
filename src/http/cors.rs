//! CORS header module
//!
//! The two permissive header sets used by the servers. The asset server
//! stamps the full set on every response it produces; the façade server
//! only adds the origin header to its JSON responses and answers preflight
//! requests with the narrower method list its routes actually support.

use hyper::header::{HeaderMap, HeaderValue};

pub const ALLOW_ORIGIN_ANY: &str = "*";

/// Methods advertised by the asset server on every response
pub const ASSET_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Headers advertised by the asset server on every response
pub const ASSET_HEADERS: &str = "Content-Type, Authorization";

/// Methods advertised by the façade server in preflight responses
pub const FACADE_METHODS: &str = "GET, POST, OPTIONS";
/// Headers advertised by the façade server in preflight responses
pub const FACADE_HEADERS: &str = "Content-Type";

/// Stamp `Access-Control-Allow-Origin: *` on a header map
pub fn apply_origin(headers: &mut HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(ALLOW_ORIGIN_ANY),
    );
}

/// Stamp the full permissive set on a header map
///
/// Values are static strings, so constructing the header values cannot
/// fail; this keeps the call site free of error handling.
pub fn apply_permissive(headers: &mut HeaderMap, methods: &'static str, allowed: &'static str) {
    apply_origin(headers);
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(methods),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(allowed),
    );
}
