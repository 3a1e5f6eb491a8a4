use std::{env, time::Duration};

use anyhow::{Context, bail};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:9009/users";
pub const DEFAULT_ORDER_DETAIL_SERVICE_URL: &str = "http://order-detail-service/api/order-details";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub user_service_url: String,
    pub order_detail_service_url: String,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so parsing can be
    /// exercised without mutating the process environment.
    ///
    /// Variables that are set but blank count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid port {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let user_service_url = lookup("USER_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_USER_SERVICE_URL.to_string());
        let order_detail_service_url = lookup("ORDER_DETAIL_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_ORDER_DETAIL_SERVICE_URL.to_string());
        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid UPSTREAM_TIMEOUT_SECS {raw:?}"))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            database_url,
            host,
            port,
            user_service_url,
            order_detail_service_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
