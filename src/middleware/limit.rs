use crate::error::AppError;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const BODY_TOO_LARGE: &str = "Request body too large!";

/// Rewrite the body-limit rejection (plain text from either the limit layer or the body
/// extractor) into the uniform JSON error shape. Must sit outside `RequestBodyLimitLayer`.
pub async fn json_payload_too_large(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    if resp.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(BODY_TOO_LARGE).into_response();
    }
    resp
}
