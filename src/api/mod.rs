//! Façade API module
//!
//! Route dispatch for the API server: a liveness route, a CORS preflight,
//! three content endpoints answered from templates, and the static asset
//! fallback for unmatched GET requests.

pub mod generate;
pub mod response;
pub mod types;

use chrono::Utc;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppState;
use crate::handler::{router, static_files, RequestContext};
use crate::http::{self, cors};
use crate::logger;
use types::{GenerationRequest, GenerationResponse};

/// Main entry point for façade request handling
///
/// Dispatches on (method, path); anything outside the table that is not a
/// GET/HEAD asset lookup is a 404.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.config.logging.access_log;
    let enable_cors = state.config.http.enable_cors;

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // The generate route consumes the request body, so the log entry is
    // captured up front and finished against the response
    let mut entry = router::start_log_entry(&req, peer_addr);

    let path = req.uri().path().to_string();
    let response = match (req.method().clone(), path.as_str()) {
        (Method::GET, "/health") => handle_health(&state),
        (Method::OPTIONS, _) => {
            http::build_preflight_response(200, cors::FACADE_METHODS, cors::FACADE_HEADERS)
        }
        (Method::POST, "/llm-content/generate") => handle_generate(req, &state).await,
        (Method::POST, "/llm-content/analyze") => handle_analyze(enable_cors),
        (Method::POST, "/llm-content/chunk") => handle_chunk(enable_cors),
        (Method::GET | Method::HEAD, _) => {
            // Unmatched reads fall through to the asset directory
            let ctx = RequestContext::from_request(&req, access_log);
            static_files::serve(&ctx, &state.config.assets).await
        }
        _ => response::endpoint_not_found(),
    };

    if access_log {
        router::finish_log_entry(&mut entry, &response, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// `GET /health`: fixed liveness payload
fn handle_health(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    response::json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "healthy",
            "timestamp": generate::iso_millis(Utc::now()),
            "service": state.config.facade.service_name,
        }),
        state.config.http.enable_cors,
    )
}

/// `POST /llm-content/generate`: template-synthesized content
///
/// Any failure between body read and payload assembly becomes the 500
/// envelope; the server keeps serving.
async fn handle_generate(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let enable_cors = state.config.http.enable_cors;

    if let Some(resp) = router::check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            return response::generation_error(
                format!("Failed to generate content: {e}"),
                enable_cors,
            )
        }
    };

    let request: GenerationRequest = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            return response::generation_error(
                format!("Failed to generate content: {e}"),
                enable_cors,
            )
        }
    };

    logger::log_generation_request(&request.topic);

    // Simulated processing latency: the façade must feel as slow as a real
    // generation backend so callers exercise their pending states
    let delay = Duration::from_millis(state.config.facade.generation_delay_ms);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let content = generate::synthesize(&request, Utc::now());
    logger::log_generation_complete(content.sections.len(), content.metadata.word_count);

    response::json_response(
        StatusCode::OK,
        &GenerationResponse {
            success: true,
            data: content,
            message: "Content generated successfully with AI enhancements",
        },
        enable_cors,
    )
}

/// `POST /llm-content/analyze`: fixed payload, body ignored
fn handle_analyze(enable_cors: bool) -> Response<Full<Bytes>> {
    let now = Utc::now();
    response::json_response(
        StatusCode::OK,
        &serde_json::json!({
            "success": true,
            "data": {
                "analysisId": format!("analysis_{}", now.timestamp_millis()),
                "metrics": {
                    "readabilityScore": 0.85,
                    "llmQualityScore": 0.90,
                },
                "recommendations": [
                    "Add more semantic structure",
                    "Include relevant keywords",
                ],
            },
        }),
        enable_cors,
    )
}

/// `POST /llm-content/chunk`: fixed payload, body ignored
fn handle_chunk(enable_cors: bool) -> Response<Full<Bytes>> {
    let now = Utc::now();
    response::json_response(
        StatusCode::OK,
        &serde_json::json!({
            "success": true,
            "data": {
                "chunkingId": format!("chunking_{}", now.timestamp_millis()),
                "chunks": [
                    { "id": "chunk_1", "content": "Sample chunk content" },
                ],
            },
        }),
        enable_cors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("does-not-exist").expect("defaults load");
        Arc::new(AppState::new(cfg))
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn test_health_payload() {
        let response = handle_health(&test_state());
        assert_eq!(response.status(), 200);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Content Architect Frontend");
        // UTC ISO-8601 with millisecond precision
        let ts = body["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len());
    }

    #[tokio::test]
    async fn test_analyze_payload() {
        let body = body_json(handle_analyze(true)).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["analysisId"]
            .as_str()
            .unwrap()
            .starts_with("analysis_"));
        assert_eq!(body["data"]["recommendations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_chunk_payload() {
        let body = body_json(handle_chunk(true)).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["chunkingId"]
            .as_str()
            .unwrap()
            .starts_with("chunking_"));
        let chunks = body["data"]["chunks"].as_array().unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0]["id"], "chunk_1");
        assert_eq!(chunks[0]["content"], "Sample chunk content");
    }

    #[tokio::test]
    async fn test_preflight_response() {
        let response =
            http::build_preflight_response(200, cors::FACADE_METHODS, cors::FACADE_HEADERS);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "GET, POST, OPTIONS"
        );
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        assert!(bytes.is_empty());
    }
}
