//! Response bodies shared by handlers and middleware.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Uniform error body: `{"error": ..., "code": ...}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

pub fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
            code: status.as_u16(),
        }),
    )
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
