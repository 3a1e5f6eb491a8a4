//! HTTP clients for the sibling services this service depends on.
use std::time::Duration;

use anyhow::Context;

pub mod order_details;
pub mod users;

pub use order_details::{DetailFetchError, HttpOrderDetailSource, OrderDetailSource};
pub use users::{HttpUserDirectory, UserDirectory, UserLookup};

/// Shared outbound client. The timeout applies to each whole request so a
/// slow sibling cannot stall a handler indefinitely.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .context("build outbound http client")
}
