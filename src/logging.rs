//! Request logging.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Logs one line per request: a generated request id, the matched route
/// template, response status and latency. Layered outermost so the
/// latency covers the whole middleware chain.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let start = Instant::now();
    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        error!(%request_id, %method, %path, status, latency_ms, "request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "request rejected");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "request completed");
    }

    response
}
