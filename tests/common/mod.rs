//! In-memory `ItemStore` and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use items_api::{app, AppState, Item, ItemStore, StoreError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const TOKEN: &str = "test-token";

#[derive(Default)]
pub struct MemoryItemStore {
    rows: Mutex<BTreeMap<i64, String>>,
    next_id: AtomicUsize,
    /// Number of store calls received (excluding ping).
    pub calls: AtomicUsize,
    /// When set, every call fails with a database error.
    pub failing: AtomicBool,
    /// Artificial latency applied before each call.
    pub delay: Mutex<Option<Duration>>,
}

impl MemoryItemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|(id, name)| Item { id: *id, name: name.clone() })
            .collect()
    }

    pub fn set_delay(&self, d: Duration) {
        *self.delay.lock().unwrap() = Some(d);
    }

    async fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, name: &str) -> Result<i64, StoreError> {
        self.enter().await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.rows.lock().unwrap().insert(id, name.to_string());
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.enter().await?;
        Ok(self.snapshot())
    }

    async fn get(&self, id: i64) -> Result<Item, StoreError> {
        self.enter().await?;
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .map(|name| Item { id, name: name.clone() })
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError> {
        self.enter().await?;
        match self.rows.lock().unwrap().get_mut(&id) {
            Some(existing) => {
                *existing = name.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.enter().await?;
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn router(store: Arc<MemoryItemStore>) -> Router {
    router_with_timeout(store, Duration::from_secs(2))
}

pub fn router_with_timeout(store: Arc<MemoryItemStore>, timeout: Duration) -> Router {
    let state = AppState::new(store, TOKEN, timeout);
    app(state, 64 * 1024)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(a) = auth {
        builder = builder.header(header::AUTHORIZATION, a);
    }
    let body = match body {
        Some(b) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    send_request(router, builder.body(body).unwrap()).await
}

pub async fn send_request(router: &Router, req: Request<Body>) -> TestResponse {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse { status, headers, body }
}

pub fn bearer() -> String {
    format!("Bearer {}", TOKEN)
}
