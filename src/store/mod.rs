use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewOrder, Order, OrderPatch};

pub mod memory;
pub mod orm;

pub use memory::MemoryOrderStore;
pub use orm::OrmOrderStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary for orders.
///
/// Soft-deleted orders are invisible to every method. Methods addressing a
/// single order return `Ok(None)` when it does not exist.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Live orders ordered by id.
    async fn list(&self) -> StoreResult<Vec<Order>>;
    async fn find(&self, id: i64) -> StoreResult<Option<Order>>;
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;
    async fn update(&self, id: i64, patch: OrderPatch) -> StoreResult<Option<Order>>;
    /// Marks the order deleted and returns it as it was stored.
    async fn soft_delete(&self, id: i64) -> StoreResult<Option<Order>>;
}
