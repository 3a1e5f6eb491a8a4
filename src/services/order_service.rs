use crate::{
    dto::orders::{CreateOrderRequest, OrderData, OrderDetailList, OrderList, UpdateOrderRequest},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
    validation::validate_order_data,
};

const ORDER_NOT_FOUND: &str = "Order not found";

/// Order ids are positive integers; anything else is rejected before the
/// store is consulted.
pub fn parse_order_id(raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidArgument(format!("Invalid order ID: {raw:?}"))),
    }
}

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let orders = state.orders.list().await?;
    if orders.is_empty() {
        return Err(AppError::NotFound("No orders found".into()));
    }

    Ok(ApiResponse::success(
        "Orders retrieved successfully",
        OrderList { orders },
    ))
}

pub async fn get_order(state: &AppState, raw_id: &str) -> AppResult<ApiResponse<OrderData>> {
    let id = parse_order_id(raw_id)?;
    let order = state
        .orders
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.into()))?;

    Ok(ApiResponse::success(
        "Order retrieved successfully",
        OrderData { order },
    ))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderData>> {
    let new_order = payload.into_new_order()?;
    validate_order_data(state.users.as_ref(), new_order.user_id).await?;

    let order = state.orders.create(new_order).await?;
    tracing::info!(order_id = order.id, user_id = order.user_id, "order created");

    Ok(ApiResponse::success(
        "Order created successfully",
        OrderData { order },
    ))
}

pub async fn update_order(
    state: &AppState,
    raw_id: &str,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<OrderData>> {
    let id = parse_order_id(raw_id)?;
    let patch = payload.into_patch()?;
    // An unchanged user id was checked when it was first written.
    if let Some(user_id) = patch.user_id {
        validate_order_data(state.users.as_ref(), user_id).await?;
    }

    let order = state
        .orders
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.into()))?;
    tracing::info!(order_id = order.id, "order updated");

    Ok(ApiResponse::success(
        "Order updated successfully",
        OrderData { order },
    ))
}

pub async fn delete_order(state: &AppState, raw_id: &str) -> AppResult<ApiResponse<OrderData>> {
    let id = parse_order_id(raw_id)?;
    let order = state
        .orders
        .soft_delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.into()))?;
    tracing::info!(order_id = order.id, "order deleted");

    Ok(ApiResponse::success(
        "Order deleted successfully",
        OrderData { order },
    ))
}

pub async fn get_order_details(
    state: &AppState,
    raw_id: &str,
) -> AppResult<ApiResponse<OrderDetailList>> {
    let id = parse_order_id(raw_id)?;
    if state.orders.find(id).await?.is_none() {
        return Err(AppError::NotFound(ORDER_NOT_FOUND.into()));
    }

    let order_details = state.details.fetch(id).await?;

    Ok(ApiResponse::success(
        "Order details retrieved successfully",
        OrderDetailList { order_details },
    ))
}
