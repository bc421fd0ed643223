//! Operational routes: liveness, store readiness, build info.

use crate::response::ok;
use crate::state::AppState;
use crate::store::with_deadline;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

/// Readiness report. `database` is omitted for the liveness route, which never touches the store.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Readiness {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

impl Readiness {
    pub fn from_store(store_ok: bool) -> (StatusCode, Self) {
        if store_ok {
            (StatusCode::OK, Readiness { status: "ok", database: Some("ok") })
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness { status: "degraded", database: Some("unavailable") },
            )
        }
    }
}

async fn alive() -> impl IntoResponse {
    ok(Readiness { status: "ok", database: None })
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let res = with_deadline(state.query_timeout, state.store.ping()).await;
    if let Err(e) = &res {
        tracing::warn!(error = %e, "readiness check failed");
    }
    let (status, body) = Readiness::from_store(res.is_ok());
    (status, Json(body))
}

async fn build_info() -> impl IntoResponse {
    ok(json!({ "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") }))
}

/// GET /health, GET /ready (store ping under the request deadline), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(alive))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
