use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderData, OrderDetailList, OrderList, UpdateOrderRequest,
    },
    models::{Order, OrderDetail},
    response::{ApiResponse, ErrorData, ResponseStatus},
    routes::{health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        orders::get_order_details,
    ),
    components(
        schemas(
            Order,
            OrderDetail,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderData,
            OrderList,
            OrderDetailList,
            ErrorData,
            ResponseStatus,
            health::HealthData,
            ApiResponse<OrderData>,
            ApiResponse<OrderList>,
            ApiResponse<OrderDetailList>,
            ApiResponse<ErrorData>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
