use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use order_service::{
    clients::{
        DetailFetchError, HttpOrderDetailSource, HttpUserDirectory, OrderDetailSource,
        UserDirectory, UserLookup, build_http_client,
    },
    error::AppError,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Bind to port 0, serve `router` in the background and return its base url.
async fn start_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn user_service() -> Router {
    Router::new().route(
        "/users/{id}",
        get(|Path(id): Path<i64>| async move {
            match id {
                1 => (StatusCode::OK, Json(json!({ "id": 1 }))),
                410 => (StatusCode::GONE, Json(json!({}))),
                429 => (StatusCode::TOO_MANY_REQUESTS, Json(json!({}))),
                403 => (StatusCode::FORBIDDEN, Json(json!({}))),
                500 => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
                _ => (StatusCode::NOT_FOUND, Json(json!({}))),
            }
        }),
    )
}

fn detail_service() -> Router {
    Router::new()
        .route(
            "/api/order-details",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let order_id = params.get("orderID").cloned().unwrap_or_default();
                match order_id.as_str() {
                    // Legacy upper-case keys plus extra bookkeeping fields.
                    "1" => (
                        StatusCode::OK,
                        Json(json!([
                            {
                                "ID": 3,
                                "CreatedAt": "2024-01-01T00:00:00Z",
                                "orderId": 1,
                                "productId": 9,
                                "quantity": 2,
                                "subtotal": 19.98
                            }
                        ])),
                    ),
                    "2" => (StatusCode::OK, Json(json!({ "unexpected": true }))),
                    "3" => (StatusCode::BAD_GATEWAY, Json(Value::Null)),
                    // Orders without rows come back as a bare `null`.
                    "5" => (StatusCode::OK, Json(Value::Null)),
                    _ => (StatusCode::OK, Json(json!([]))),
                }
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([]))
            }),
        )
}

/// A base url nothing is listening on.
async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    build_http_client(Duration::from_millis(500)).expect("client")
}

#[tokio::test]
async fn user_lookup_distinguishes_missing_from_unreachable() {
    let base = start_server(user_service()).await;
    let users = HttpUserDirectory::new(format!("{base}/users/"), client());

    assert_eq!(users.lookup(1).await, UserLookup::Exists);
    assert_eq!(users.lookup(2).await, UserLookup::NotFound);
    assert_eq!(users.lookup(410).await, UserLookup::NotFound);
    assert_eq!(users.lookup(500).await, UserLookup::Unreachable);
    // Throttled or refused requests say nothing about whether the user exists.
    assert_eq!(users.lookup(429).await, UserLookup::Unreachable);
    assert_eq!(users.lookup(403).await, UserLookup::Unreachable);

    let offline = HttpUserDirectory::new(format!("{}/users", closed_url().await), client());
    assert_eq!(offline.lookup(1).await, UserLookup::Unreachable);
}

#[tokio::test]
async fn detail_fetch_decodes_rows() {
    let base = start_server(detail_service()).await;
    let details = HttpOrderDetailSource::new(format!("{base}/api/order-details"), client());

    let rows = details.fetch(1).await.expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[0].order_id, 1);
    assert_eq!(rows[0].product_id, 9);
    assert_eq!(rows[0].quantity, 2);

    assert!(details.fetch(4).await.expect("empty").is_empty());
    assert!(details.fetch(5).await.expect("null body").is_empty());
}

#[tokio::test]
async fn detail_fetch_failures_map_to_upstream_and_decode_errors() {
    let base = start_server(detail_service()).await;
    let details = HttpOrderDetailSource::new(format!("{base}/api/order-details"), client());

    let err = details.fetch(2).await.unwrap_err();
    assert!(matches!(err, DetailFetchError::Decode(_)));
    assert!(matches!(AppError::from(err), AppError::Decode(_)));

    let err = details.fetch(3).await.unwrap_err();
    assert!(matches!(err, DetailFetchError::Status(code) if code == StatusCode::BAD_GATEWAY));
    assert!(matches!(AppError::from(err), AppError::Upstream(_)));

    let offline = HttpOrderDetailSource::new(closed_url().await, client());
    let err = offline.fetch(1).await.unwrap_err();
    assert!(matches!(err, DetailFetchError::Transport(_)));
}

#[tokio::test]
async fn slow_sibling_is_cut_off_by_the_timeout() {
    let base = start_server(detail_service()).await;
    let details = HttpOrderDetailSource::new(format!("{base}/slow"), client());

    let started = std::time::Instant::now();
    let err = details.fetch(1).await.unwrap_err();
    assert!(matches!(err, DetailFetchError::Transport(_)));
    assert!(started.elapsed() < Duration::from_secs(2));
}
