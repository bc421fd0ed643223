//! Bearer-token guard for mutation routes.

use crate::error::AppError;
use crate::extractors::BearerToken;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

pub const INVALID_AUTH_TOKEN: &str = "Invalid auth token!";

/// Reject with 401 unless the bearer token equals the configured secret. A missing or
/// malformed header is rejected by the `BearerToken` extractor before this body runs.
pub async fn require_bearer(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if token.as_str() != &*state.auth_token {
        tracing::warn!(path = %req.uri().path(), "rejected request with invalid auth token");
        return Err(AppError::Unauthorized(INVALID_AUTH_TOKEN));
    }
    Ok(next.run(req).await)
}
