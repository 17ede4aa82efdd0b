//! Menu handlers — the public card and the staff catalogue.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use plage_core::error::AppError;
use plage_entity::menu::{CreateFoodItem, FoodItem, UpdateFoodItem};

use crate::dto::request::{CreateFoodItemRequest, UpdateFoodItemRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/food-items
pub async fn list_food_items(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FoodItem>>>, AppError> {
    let items = state.menu_service.list_available().await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/food-items/admin/all
pub async fn admin_list_food_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<FoodItem>>>, AppError> {
    let items = state.menu_service.list_all(&auth).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/food-items
pub async fn create_food_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFoodItemRequest>,
) -> Result<Json<ApiResponse<FoodItem>>, AppError> {
    let item = state
        .menu_service
        .create(
            &auth,
            CreateFoodItem {
                name: req.name,
                description: req.description,
                price: req.price,
                category: req.category,
                available: req.available,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/food-items/{id}
pub async fn update_food_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFoodItemRequest>,
) -> Result<Json<ApiResponse<FoodItem>>, AppError> {
    let item = state
        .menu_service
        .update(
            &auth,
            id,
            UpdateFoodItem {
                name: req.name,
                description: req.description,
                price: req.price,
                category: req.category,
                available: req.available,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/food-items/{id}
pub async fn delete_food_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.menu_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Menu item deleted".to_string(),
    })))
}
