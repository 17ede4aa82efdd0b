//! Food order handlers — ordering and the kitchen workflow.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use plage_core::error::AppError;
use plage_entity::order::FoodOrder;
use plage_service::order::{AdminOrder, OrderLine, OrderRequest, OrderWithItems};

use crate::dto::request::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<OrderWithItems>>, AppError> {
    let order = state
        .order_service
        .create(
            &auth,
            OrderRequest {
                order_type: req.order_type,
                reservation_id: req.reservation_id,
                delivery_address: req.delivery_address,
                items: req
                    .items
                    .into_iter()
                    .map(|line| OrderLine {
                        food_item_id: line.food_item_id,
                        quantity: line.quantity,
                    })
                    .collect(),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(order)))
}

/// GET /api/orders/my-orders
pub async fn my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<OrderWithItems>>>, AppError> {
    let orders = state.order_service.list_own(&auth).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/admin/all
pub async fn admin_list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<AdminOrder>>>, AppError> {
    let orders = state.order_service.list_all(&auth).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// PUT /api/orders/admin/{id}/status
pub async fn admin_update_order_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<FoodOrder>>, AppError> {
    let order = state
        .order_service
        .update_status(&auth, id, &req.status)
        .await?;

    Ok(Json(ApiResponse::ok(order)))
}
