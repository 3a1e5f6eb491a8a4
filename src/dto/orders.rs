use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{NewOrder, Order, OrderDetail, OrderPatch},
};

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "userId, orderDate, totalAmount, and status are required fields";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Option<i64>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl CreateOrderRequest {
    /// Required-field check that runs before the user reference is validated.
    pub fn into_new_order(self) -> AppResult<NewOrder> {
        let (Some(user_id), Some(order_date), Some(total_amount), Some(status)) =
            (self.user_id, self.order_date, self.total_amount, self.status)
        else {
            return Err(AppError::InvalidArgument(REQUIRED_FIELDS_MESSAGE.into()));
        };

        check_user_id(user_id)?;
        if !total_amount.is_finite() || total_amount <= 0.0 {
            return Err(AppError::InvalidArgument(
                "totalAmount must be greater than zero".into(),
            ));
        }
        let status = check_status(status)?;

        Ok(NewOrder {
            user_id,
            order_date,
            total_amount,
            status,
        })
    }
}

/// Partial update body. Omitted and `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub user_id: Option<i64>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl UpdateOrderRequest {
    pub fn into_patch(self) -> AppResult<OrderPatch> {
        if let Some(user_id) = self.user_id {
            check_user_id(user_id)?;
        }
        if let Some(total_amount) = self.total_amount {
            if !total_amount.is_finite() || total_amount < 0.0 {
                return Err(AppError::InvalidArgument(
                    "totalAmount must not be negative".into(),
                ));
            }
        }
        let status = self.status.map(check_status).transpose()?;

        let patch = OrderPatch {
            user_id: self.user_id,
            order_date: self.order_date,
            total_amount: self.total_amount,
            status,
        };
        if patch.is_empty() {
            return Err(AppError::InvalidArgument(
                "at least one of userId, orderDate, totalAmount, or status must be provided"
                    .into(),
            ));
        }
        Ok(patch)
    }
}

fn check_user_id(user_id: i64) -> AppResult<()> {
    if user_id <= 0 {
        return Err(AppError::InvalidArgument(
            "userId must be a positive integer".into(),
        ));
    }
    Ok(())
}

fn check_status(status: String) -> AppResult<String> {
    let trimmed = status.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidArgument("status must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderData {
    pub order: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailList {
    pub order_details: Vec<OrderDetail>,
}
