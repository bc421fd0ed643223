//! Items API: CRUD over a single PostgreSQL table with bearer-gated mutations.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Item, ItemPayload};
pub use routes::{app, common_routes, item_routes};
pub use state::AppState;
pub use store::{with_deadline, ItemStore, PgItemStore};
