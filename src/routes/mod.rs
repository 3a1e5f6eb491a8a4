use axum::{
    Router,
    http::{Method, Uri},
    routing::get,
};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod health;
pub mod orders;

/// Full application router with state applied. Transport layers (tracing,
/// request ids, limits) are added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(orders::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {method} is not allowed on {}", uri.path()))
}
