#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use order_service::{
    clients::{DetailFetchError, OrderDetailSource, UserDirectory, UserLookup},
    models::{NewOrder, Order, OrderDetail, OrderPatch},
    routes::create_router,
    state::AppState,
    store::{MemoryOrderStore, OrderStore, StoreError, StoreResult},
};
use reqwest::StatusCode;

/// User directory answering from a fixed set of ids.
pub struct StubUsers {
    existing: HashSet<i64>,
    unreachable: bool,
    pub calls: AtomicUsize,
}

impl StubUsers {
    pub fn with(ids: &[i64]) -> Self {
        Self {
            existing: ids.iter().copied().collect(),
            unreachable: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            existing: HashSet::new(),
            unreachable: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl UserDirectory for StubUsers {
    async fn lookup(&self, user_id: i64) -> UserLookup {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            UserLookup::Unreachable
        } else if self.existing.contains(&user_id) {
            UserLookup::Exists
        } else {
            UserLookup::NotFound
        }
    }
}

pub enum DetailMode {
    Rows(Vec<OrderDetail>),
    Status(u16),
    Garbage,
}

pub struct StubDetails {
    mode: DetailMode,
    pub calls: AtomicUsize,
}

impl StubDetails {
    pub fn new(mode: DetailMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrderDetailSource for StubDetails {
    async fn fetch(&self, order_id: i64) -> Result<Vec<OrderDetail>, DetailFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            DetailMode::Rows(rows) => Ok(rows
                .iter()
                .filter(|row| row.order_id == order_id)
                .cloned()
                .collect()),
            DetailMode::Status(code) => Err(DetailFetchError::Status(
                StatusCode::from_u16(*code).expect("status code"),
            )),
            DetailMode::Garbage => Err(DetailFetchError::Decode(
                serde_json::from_str::<Vec<OrderDetail>>("{\"not\":\"a list\"}").unwrap_err(),
            )),
        }
    }
}

/// Wraps the in-memory store and counts every call that reaches it.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryOrderStore,
    pub calls: AtomicUsize,
}

impl CountingStore {
    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderStore for CountingStore {
    async fn list(&self) -> StoreResult<Vec<Order>> {
        self.hit();
        self.inner.list().await
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Order>> {
        self.hit();
        self.inner.find(id).await
    }

    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        self.hit();
        self.inner.create(order).await
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> StoreResult<Option<Order>> {
        self.hit();
        self.inner.update(id, patch).await
    }

    async fn soft_delete(&self, id: i64) -> StoreResult<Option<Order>> {
        self.hit();
        self.inner.soft_delete(id).await
    }
}

/// Store whose every call fails, standing in for a lost database.
pub struct BrokenStore;

fn broken<T>() -> StoreResult<T> {
    Err(StoreError::Unexpected(anyhow::anyhow!("connection refused")))
}

#[async_trait]
impl OrderStore for BrokenStore {
    async fn list(&self) -> StoreResult<Vec<Order>> {
        broken()
    }

    async fn find(&self, _id: i64) -> StoreResult<Option<Order>> {
        broken()
    }

    async fn create(&self, _order: NewOrder) -> StoreResult<Order> {
        broken()
    }

    async fn update(&self, _id: i64, _patch: OrderPatch) -> StoreResult<Option<Order>> {
        broken()
    }

    async fn soft_delete(&self, _id: i64) -> StoreResult<Option<Order>> {
        broken()
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<CountingStore>,
    pub users: Arc<StubUsers>,
    pub details: Arc<StubDetails>,
}

impl TestApp {
    pub fn new(users: StubUsers, details: StubDetails) -> Self {
        let store = Arc::new(CountingStore::default());
        let users = Arc::new(users);
        let details = Arc::new(details);
        let state = AppState::new(store.clone(), users.clone(), details.clone());
        Self {
            router: create_router(state),
            store,
            users,
            details,
        }
    }

    pub fn store_calls(&self) -> usize {
        self.store.calls.load(Ordering::SeqCst)
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
