//! Contact message handlers — public form intake and the staff inbox.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use plage_core::error::AppError;
use plage_entity::contact::ContactMessage;
use plage_service::contact::ContactRequest;

use crate::dto::request::{CreateContactMessageRequest, UpdateMessageStatusRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

/// POST /api/contact-messages
pub async fn create_message(
    State(state): State<AppState>,
    OptionalAuthUser(ctx): OptionalAuthUser,
    Json(req): Json<CreateContactMessageRequest>,
) -> Result<Json<ApiResponse<ContactMessage>>, AppError> {
    let message = state
        .contact_service
        .submit(
            ctx.map(|c| c.user_id),
            ContactRequest {
                name: req.name,
                email: req.email,
                phone: req.phone,
                message: req.message,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(message)))
}

/// GET /api/contact-messages/admin/all
pub async fn admin_list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ContactMessage>>>, AppError> {
    let messages = state.contact_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(messages)))
}

/// PUT /api/contact-messages/admin/{id}/status
pub async fn admin_update_message_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMessageStatusRequest>,
) -> Result<Json<ApiResponse<ContactMessage>>, AppError> {
    let message = state
        .contact_service
        .update_status(&auth, id, &req.status)
        .await?;

    Ok(Json(ApiResponse::ok(message)))
}

/// DELETE /api/contact-messages/admin/{id}
pub async fn admin_delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.contact_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Contact message deleted".to_string(),
    })))
}
