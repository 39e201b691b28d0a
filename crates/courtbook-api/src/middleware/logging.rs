//! Access log middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Log one line per request. Rejections log at `warn`, server faults at `error`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let path = uri.path();
    let query = uri.query().unwrap_or_default();

    match status {
        500.. => error!(%method, path, query, status, elapsed_ms, "Request failed"),
        400..=499 => warn!(%method, path, query, status, elapsed_ms, "Request rejected"),
        _ => info!(%method, path, status, elapsed_ms, "Request served"),
    }

    response
}
