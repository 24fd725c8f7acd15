//! Request routing dispatch module
//!
//! Entry point for the static asset server: method validation, body-size
//! guard, file dispatch, CORS stamping, and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context shared with the file-serving layer
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

impl<'a> RequestContext<'a> {
    /// Extract the context from request parts
    pub fn from_request<B>(req: &'a Request<B>, access_log: bool) -> Self {
        Self {
            path: req.uri().path(),
            is_head: *req.method() == Method::HEAD,
            if_none_match: req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
            access_log,
        }
    }
}

/// Main entry point for asset server request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.config.logging.access_log;
    let enable_cors = state.config.http.enable_cors;

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut response = dispatch(&req, &state, access_log).await;

    // Every response the asset server produces carries the permissive set
    if enable_cors {
        cors::apply_permissive(response.headers_mut(), cors::ASSET_METHODS, cors::ASSET_HEADERS);
    }

    if access_log {
        let mut entry = start_log_entry(&req, peer_addr);
        finish_log_entry(&mut entry, &response, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route the request to the right builder
async fn dispatch(
    req: &Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    access_log: bool,
) -> Response<Full<Bytes>> {
    // 1. Method gate: files are read-only
    match req.method() {
        &Method::GET | &Method::HEAD => {}
        &Method::OPTIONS => {
            return http::build_preflight_response(204, cors::ASSET_METHODS, cors::ASSET_HEADERS)
        }
        method => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return http::build_405_response();
        }
    }

    // 2. Body size guard
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    // 3. File dispatch
    let ctx = RequestContext::from_request(req, access_log);
    static_files::serve(&ctx, &state.config.assets).await
}

/// Validate Content-Length header and return 413 if exceeded
pub fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Capture the request side of an access log entry
///
/// Split from [`finish_log_entry`] because handlers that read the request
/// body consume the request before the response exists.
pub fn start_log_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version_label(req.version()).to_string();
    entry.referer = header_value(req, "referer");
    entry.user_agent = header_value(req, "user-agent");
    entry
}

/// Fill in the response side of an access log entry
pub fn finish_log_entry(
    entry: &mut AccessLogEntry,
    response: &Response<Full<Bytes>>,
    started: Instant,
) {
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
