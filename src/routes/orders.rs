use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderData, OrderDetailList, OrderList, UpdateOrderRequest},
    error::AppResult,
    response::{ApiResponse, ErrorData},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", get(list_orders).post(create_order))
        .route("/order/", get(list_orders).post(create_order))
        .route(
            "/order/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/order/{id}/details", get(get_order_details))
}

#[utoipa::path(
    get,
    path = "/order/",
    responses(
        (status = 200, description = "All live orders", body = ApiResponse<OrderList>),
        (status = 404, description = "No orders exist", body = ApiResponse<ErrorData>),
        (status = 500, description = "Store failure", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = ApiResponse<OrderData>),
        (status = 400, description = "Invalid order ID", body = ApiResponse<ErrorData>),
        (status = 404, description = "Order not found", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<OrderData>>> {
    let Path(id) = id?;
    let resp = order_service::get_order(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/order/",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderData>),
        (status = 400, description = "Invalid body or unknown user", body = ApiResponse<ErrorData>),
        (status = 500, description = "Store or user service failure", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderData>>)> {
    let Json(payload) = payload?;
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderData>),
        (status = 400, description = "Invalid ID, body or unknown user", body = ApiResponse<ErrorData>),
        (status = 404, description = "Order not found", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<OrderData>>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let resp = order_service::update_order(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Soft-deleted order", body = ApiResponse<OrderData>),
        (status = 400, description = "Invalid order ID", body = ApiResponse<ErrorData>),
        (status = 404, description = "Order not found", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<OrderData>>> {
    let Path(id) = id?;
    let resp = order_service::delete_order(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/order/{id}/details",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Line items from the order-detail service", body = ApiResponse<OrderDetailList>),
        (status = 400, description = "Invalid order ID", body = ApiResponse<ErrorData>),
        (status = 404, description = "Order not found", body = ApiResponse<ErrorData>),
        (status = 500, description = "Order-detail service failure", body = ApiResponse<ErrorData>),
    ),
    tag = "Orders"
)]
pub async fn get_order_details(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<OrderDetailList>>> {
    let Path(id) = id?;
    let resp = order_service::get_order_details(&state, &id).await?;
    Ok(Json(resp))
}
