use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log method and path before the request is handled and the elapsed time after.
/// Never short-circuits.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    tracing::info!(%method, %path, "request started");

    let resp = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request finished"
    );
    resp
}
