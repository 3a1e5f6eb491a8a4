use async_trait::async_trait;
use reqwest::StatusCode;

/// Outcome of asking the user service whether an id exists.
///
/// `NotFound` and `Unreachable` are kept apart so callers can tell a missing
/// user from a user service that could not answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    Exists,
    NotFound,
    Unreachable,
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup(&self, user_id: i64) -> UserLookup;
}

#[derive(Clone)]
pub struct HttpUserDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn user_url(&self, user_id: i64) -> String {
        format!("{}/{}", self.base_url, user_id)
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn lookup(&self, user_id: i64) -> UserLookup {
        let url = self.user_url(user_id);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%url, error = %err, "user service request failed");
                return UserLookup::Unreachable;
            }
        };

        let status = response.status();
        match status {
            StatusCode::OK => UserLookup::Exists,
            StatusCode::NOT_FOUND | StatusCode::GONE => UserLookup::NotFound,
            _ => {
                tracing::warn!(%url, %status, "user service returned unexpected status");
                UserLookup::Unreachable
            }
        }
    }
}
