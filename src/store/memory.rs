//! In-memory order store.
//!
//! Mirrors the Postgres store's semantics (sequential ids, soft-delete,
//! timestamps) without any external dependency. Used by the test-suite and
//! handy for running the HTTP surface locally. Nothing survives a restart.
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{OrderStore, StoreResult};
use crate::models::{NewOrder, Order, OrderPatch};

#[derive(Default)]
pub struct MemoryOrderStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    orders: BTreeMap<i64, Order>,
}

impl Inner {
    fn live_mut(&mut self, id: i64) -> Option<&mut Order> {
        self.orders
            .get_mut(&id)
            .filter(|order| order.deleted_at.is_none())
    }
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not soft-deleted) orders.
    pub async fn live_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner
            .orders
            .values()
            .filter(|order| order.deleted_at.is_none())
            .count()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn list(&self) -> StoreResult<Vec<Order>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .values()
            .filter(|order| order.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Order>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .get(&id)
            .filter(|order| order.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let order = Order {
            id: inner.last_id,
            user_id: order.user_id,
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> StoreResult<Option<Order>> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.live_mut(id) else {
            return Ok(None);
        };
        patch.apply_to(order);
        order.updated_at = Utc::now();
        Ok(Some(order.clone()))
    }

    async fn soft_delete(&self, id: i64) -> StoreResult<Option<Order>> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.live_mut(id) else {
            return Ok(None);
        };
        let now = Utc::now();
        order.deleted_at = Some(now);
        order.updated_at = now;
        Ok(Some(order.clone()))
    }
}
