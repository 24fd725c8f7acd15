//! Façade response utility functions
//!
//! All JSON emission funnels through [`json_response`] so status, headers,
//! and CORS stamping live in one place.

use crate::http::cors;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ErrorResponse;

/// Build a JSON response, optionally carrying the CORS origin header
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    let mut response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        });

    if enable_cors {
        cors::apply_origin(response.headers_mut());
    }

    response
}

/// 500 envelope for a failed generation attempt
pub fn generation_error(error: String, enable_cors: bool) -> Response<Full<Bytes>> {
    logger::log_generation_failed(&error);
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorResponse {
            success: false,
            error,
            message: "Content generation failed",
        },
        enable_cors,
    )
}

/// 404 for any method/path pair outside the route table
pub fn endpoint_not_found() -> Response<Full<Bytes>> {
    crate::http::build_text_response(404, "Endpoint not found")
}

/// Last-resort 500 when even serialization failed
fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"success":false,"error":"Internal server error"}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}
