use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{clients::DetailFetchError, response::ApiResponse, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed identifier or payload.
    #[error("{0}")]
    InvalidArgument(String),

    /// Well-formed request that breaks a business rule.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A sibling service failed or could not be reached.
    #[error("{0}")]
    Upstream(String),

    /// A sibling service answered with a body we cannot read.
    #[error("{0}")]
    Decode(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store(_) | AppError::Upstream(_) | AppError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Messages for the error envelope. Server-side failures carry a summary
    /// followed by the underlying cause.
    pub fn errors(&self) -> Vec<String> {
        match self {
            AppError::Store(source) => {
                vec!["Store operation failed".to_string(), source.to_string()]
            }
            AppError::Upstream(cause) => {
                vec!["Upstream service request failed".to_string(), cause.clone()]
            }
            AppError::Decode(cause) => {
                vec!["Upstream response could not be decoded".to_string(), cause.clone()]
            }
            _ => vec![self.to_string()],
        }
    }
}

impl From<DetailFetchError> for AppError {
    fn from(err: DetailFetchError) -> Self {
        match err {
            DetailFetchError::Decode(_) => AppError::Decode(err.to_string()),
            DetailFetchError::Transport(_) | DetailFetchError::Status(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidArgument(format!("Invalid request format: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidArgument(format!("Invalid order ID: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = ApiResponse::failure(self.errors());
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
