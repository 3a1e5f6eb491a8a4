use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::{OrderStore, StoreResult};
use crate::{
    entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    models::{NewOrder, Order, OrderPatch},
};

/// Postgres-backed store. Every write runs in its own transaction.
#[derive(Clone)]
pub struct OrmOrderStore {
    conn: DatabaseConnection,
}

impl OrmOrderStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl OrderStore for OrmOrderStore {
    async fn list(&self) -> StoreResult<Vec<Order>> {
        let orders = Orders::find()
            .filter(OrderCol::DeletedAt.is_null())
            .order_by_asc(OrderCol::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(order_from_entity)
            .collect();
        Ok(orders)
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Order>> {
        let order = Orders::find_by_id(id)
            .filter(OrderCol::DeletedAt.is_null())
            .one(&self.conn)
            .await?
            .map(order_from_entity);
        Ok(order)
    }

    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let txn = self.conn.begin().await?;
        let inserted = OrderActive {
            id: NotSet,
            user_id: Set(order.user_id),
            order_date: Set(order.order_date.into()),
            total_amount: Set(order.total_amount),
            status: Set(order.status),
            created_at: NotSet,
            updated_at: NotSet,
            deleted_at: Set(None),
        }
        .insert(&txn)
        .await;

        let model = commit_or_rollback(txn, inserted).await?;
        Ok(order_from_entity(model))
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> StoreResult<Option<Order>> {
        let txn = self.conn.begin().await?;
        let result = update_locked(&txn, id, patch).await;
        let model = commit_or_rollback(txn, result).await?;
        Ok(model.map(order_from_entity))
    }

    async fn soft_delete(&self, id: i64) -> StoreResult<Option<Order>> {
        let txn = self.conn.begin().await?;
        let result = soft_delete_locked(&txn, id).await;
        let model = commit_or_rollback(txn, result).await?;
        Ok(model.map(order_from_entity))
    }
}

async fn find_live_for_update(
    txn: &DatabaseTransaction,
    id: i64,
) -> Result<Option<OrderModel>, DbErr> {
    Orders::find_by_id(id)
        .filter(OrderCol::DeletedAt.is_null())
        .lock(LockType::Update)
        .one(txn)
        .await
}

async fn update_locked(
    txn: &DatabaseTransaction,
    id: i64,
    patch: OrderPatch,
) -> Result<Option<OrderModel>, DbErr> {
    let Some(existing) = find_live_for_update(txn, id).await? else {
        return Ok(None);
    };

    let mut active: OrderActive = existing.into();
    if let Some(user_id) = patch.user_id {
        active.user_id = Set(user_id);
    }
    if let Some(order_date) = patch.order_date {
        active.order_date = Set(order_date.into());
    }
    if let Some(total_amount) = patch.total_amount {
        active.total_amount = Set(total_amount);
    }
    if let Some(status) = patch.status {
        active.status = Set(status);
    }
    active.updated_at = Set(Utc::now().into());

    active.update(txn).await.map(Some)
}

async fn soft_delete_locked(
    txn: &DatabaseTransaction,
    id: i64,
) -> Result<Option<OrderModel>, DbErr> {
    let Some(existing) = find_live_for_update(txn, id).await? else {
        return Ok(None);
    };

    let now = Utc::now();
    let mut active: OrderActive = existing.into();
    active.deleted_at = Set(Some(now.into()));
    active.updated_at = Set(now.into());

    active.update(txn).await.map(Some)
}

/// Commits when `result` is ok, otherwise rolls back and hands back the
/// original error.
async fn commit_or_rollback<T>(txn: DatabaseTransaction, result: Result<T, DbErr>) -> StoreResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err.into())
        }
    }
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        order_date: model.order_date.with_timezone(&Utc),
        total_amount: model.total_amount,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        deleted_at: model.deleted_at.map(|dt| dt.with_timezone(&Utc)),
    }
}
