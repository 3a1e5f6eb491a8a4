use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A line item owned by the order-detail service.
///
/// Decoding also accepts the upper-case keys (`ID`, `orderID`, `productID`)
/// that service has historically emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "orderID")]
    pub order_id: i64,
    #[serde(alias = "productID")]
    pub product_id: i64,
    pub quantity: i32,
    pub subtotal: f64,
}

/// Fields of an order that has passed the required-field check.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: String,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub user_id: Option<i64>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.order_date.is_none()
            && self.total_amount.is_none()
            && self.status.is_none()
    }

    pub fn apply_to(self, order: &mut Order) {
        if let Some(user_id) = self.user_id {
            order.user_id = user_id;
        }
        if let Some(order_date) = self.order_date {
            order.order_date = order_date;
        }
        if let Some(total_amount) = self.total_amount {
            order.total_amount = total_amount;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
    }
}
