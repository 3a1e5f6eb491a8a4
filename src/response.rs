use serde::Serialize;
use utoipa::ToSchema;

pub const FAILURE_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The envelope every endpoint answers with.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data,
        }
    }
}

impl ApiResponse<ErrorData> {
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: FAILURE_MESSAGE.to_string(),
            data: ErrorData { errors },
        }
    }
}
