//! Shared application state for all routes. The store is injected at composition time.

use crate::config::AppConfig;
use crate::store::ItemStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    /// Shared secret required by the auth guard.
    pub auth_token: Arc<str>,
    /// Deadline for every store call made while serving a request.
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, auth_token: impl Into<Arc<str>>, query_timeout: Duration) -> Self {
        AppState {
            store,
            auth_token: auth_token.into(),
            query_timeout,
        }
    }

    pub fn from_config(store: Arc<dyn ItemStore>, config: &AppConfig) -> Self {
        Self::new(store, config.auth_token.as_str(), config.query_timeout)
    }
}
