use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::OrderDetail;

#[derive(Debug, Error)]
pub enum DetailFetchError {
    #[error("failed to fetch order details: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to fetch order details. Status code: {}", .0.as_u16())]
    Status(StatusCode),
    #[error("failed to decode order details: {0}")]
    Decode(#[source] serde_json::Error),
}

#[async_trait]
pub trait OrderDetailSource: Send + Sync {
    async fn fetch(&self, order_id: i64) -> Result<Vec<OrderDetail>, DetailFetchError>;
}

#[derive(Clone)]
pub struct HttpOrderDetailSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpOrderDetailSource {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl OrderDetailSource for HttpOrderDetailSource {
    async fn fetch(&self, order_id: i64) -> Result<Vec<OrderDetail>, DetailFetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("orderID", order_id)])
            .send()
            .await
            .map_err(DetailFetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DetailFetchError::Status(status));
        }

        let body = response.bytes().await.map_err(DetailFetchError::Transport)?;
        // A `null` body is how the detail service reports an order without rows.
        let rows: Option<Vec<OrderDetail>> =
            serde_json::from_slice(&body).map_err(DetailFetchError::Decode)?;
        Ok(rows.unwrap_or_default())
    }
}
