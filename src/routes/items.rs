//! Item CRUD routes. Reads are public; mutations go through the bearer guard.

use crate::handlers::{create_item, delete_item, get_item, list_items, update_item};
use crate::middleware::require_bearer;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{post, put},
    Router,
};

/// `route_layer` on a method router only wraps the methods registered before it, so the
/// guard covers POST/PUT/DELETE and the GET handlers added afterwards stay public.
pub fn item_routes(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_bearer);
    Router::new()
        .route(
            "/items",
            post(create_item).route_layer(auth.clone()).get(list_items),
        )
        .route(
            "/items/:id",
            put(update_item)
                .delete(delete_item)
                .route_layer(auth)
                .get(get_item),
        )
        .with_state(state)
}
