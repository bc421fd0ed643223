//! Request interceptors. `log_requests` wraps every route; `require_bearer` wraps only
//! the mutation routes and runs inside the logger.

pub mod auth;
pub mod limit;
pub mod logger;

pub use auth::{require_bearer, INVALID_AUTH_TOKEN};
pub use limit::{json_payload_too_large, BODY_TOO_LARGE};
pub use logger::log_requests;
