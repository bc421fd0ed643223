//! Route tables and full application assembly.

pub mod common;
pub mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::middleware::{json_payload_too_large, log_requests};
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Complete application: item and common routes, all behind the request logger and body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(json_payload_too_large))
        .layer(middleware::from_fn(log_requests))
}
