//! Extract the bearer token from the `Authorization` header.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

pub const BEARER_PREFIX: &str = "Bearer ";
pub const MISSING_AUTH_HEADER: &str = "Missing or invalid auth header!";

/// Token following the literal `Bearer ` prefix, trimmed of surrounding whitespace.
/// Rejects with 401 when the header is absent or lacks the prefix. The prefix is matched on
/// raw bytes, so a non-ASCII token still reaches the comparison and fails there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.as_bytes().strip_prefix(BEARER_PREFIX.as_bytes()))
            .map(|t| BearerToken(String::from_utf8_lossy(t).trim().to_string()))
            .ok_or(AppError::Unauthorized(MISSING_AUTH_HEADER))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}
