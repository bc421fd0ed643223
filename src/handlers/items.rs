//! Item CRUD handlers: list, get, create, update, delete.
//! Input is validated before the store is touched; every store call runs under the
//! request deadline from `AppState`.

use crate::error::{AppError, StoreError};
use crate::model::{Item, ItemPayload};
use crate::response::ok;
use crate::state::AppState;
use crate::store::with_deadline;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub const ITEM_NOT_FOUND: &str = "Item not found!";
pub const INVALID_ID: &str = "Invalid id";
pub const INVALID_ID_MUTATION: &str = "Invalid id!";
pub const LIST_FAILED: &str = "Failed to list items.";
pub const GET_FAILED: &str = "Internal Error!";
pub const CREATE_FAILED: &str = "Failed to create!";
pub const UPDATE_FAILED: &str = "Failed to update!";
pub const DELETE_FAILED: &str = "Failed to delete!";

fn parse_id(raw: &str, message: &'static str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::BadRequest(message))
}

/// Map a store failure to the client error for `op`. Absence becomes 404; anything else is
/// logged with its detail and reported as `message` with a 500.
fn store_failure(op: &'static str, message: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| match err {
        StoreError::NotFound => AppError::NotFound(ITEM_NOT_FOUND),
        other => {
            tracing::error!(op, error = %other, "store call failed");
            AppError::Internal(message)
        }
    }
}

pub fn item_location(id: i64) -> String {
    format!("/items/{}", id)
}

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = with_deadline(state.query_timeout, state.store.list())
        .await
        .map_err(store_failure("list", LIST_FAILED))?;
    Ok(ok(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let item = with_deadline(state.query_timeout, state.store.get(id))
        .await
        .map_err(store_failure("get", GET_FAILED))?;
    Ok(ok(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = ItemPayload::from_slice(&body)?;
    let name = payload.validated_name()?;
    let id = with_deadline(state.query_timeout, state.store.create(&name))
        .await
        .map_err(store_failure("create", CREATE_FAILED))?;
    tracing::info!(id, "item created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, item_location(id))],
        Json(Item { id, name }),
    ))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id, INVALID_ID_MUTATION)?;
    let payload = ItemPayload::from_slice(&body)?;
    let name = payload.validated_name()?;
    with_deadline(state.query_timeout, state.store.update(id, &name))
        .await
        .map_err(store_failure("update", UPDATE_FAILED))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id, INVALID_ID_MUTATION)?;
    with_deadline(state.query_timeout, state.store.delete(id))
        .await
        .map_err(store_failure("delete", DELETE_FAILED))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42", INVALID_ID).unwrap(), 42);
        assert_eq!(parse_id("abc", INVALID_ID).unwrap_err(), AppError::BadRequest(INVALID_ID));
        assert_eq!(
            parse_id("1.5", INVALID_ID_MUTATION).unwrap_err(),
            AppError::BadRequest(INVALID_ID_MUTATION)
        );
    }

    #[test]
    fn not_found_maps_to_404_and_other_failures_to_generic_500() {
        assert_eq!(
            store_failure("get", GET_FAILED)(StoreError::NotFound),
            AppError::NotFound(ITEM_NOT_FOUND)
        );
        assert_eq!(
            store_failure("update", UPDATE_FAILED)(StoreError::Timeout(std::time::Duration::from_secs(2))),
            AppError::Internal(UPDATE_FAILED)
        );
        assert_eq!(
            store_failure("delete", DELETE_FAILED)(StoreError::Db(sqlx::Error::PoolTimedOut)),
            AppError::Internal(DELETE_FAILED)
        );
    }
}
