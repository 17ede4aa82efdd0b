//! Reservation handlers — booking, lifecycle, and the staff review list.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use plage_core::error::AppError;
use plage_entity::reservation::{Reservation, ReservationWithOwner, TableType};
use plage_service::reservation::{BookingRequest, BookingUpdate};

use crate::dto::request::{CreateReservationRequest, UpdateReservationRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/reservations/table-types
pub async fn list_table_types(
    State(state): State<AppState>,
) -> Json<ApiResponse<&'static [TableType]>> {
    Json(ApiResponse::ok(state.reservation_service.table_types()))
}

/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let reservation = state
        .reservation_service
        .create(
            &auth,
            BookingRequest {
                table_type: req.table_type,
                reservation_date: req.reservation_date,
                start_time: req.start_time,
                end_time: req.end_time,
                num_people: req.num_people,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(reservation)))
}

/// GET /api/reservations/my-reservations
pub async fn my_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Reservation>>>, AppError> {
    let reservations = state.reservation_service.list_own(&auth).await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations/admin/all
pub async fn admin_list_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ReservationWithOwner>>>, AppError> {
    let reservations = state.reservation_service.list_for_review(&auth).await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let reservation = state.reservation_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// PUT /api/reservations/{id}
pub async fn update_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let reservation = state
        .reservation_service
        .update(
            &auth,
            id,
            BookingUpdate {
                table_type: req.table_type,
                reservation_date: req.reservation_date,
                start_time: req.start_time,
                end_time: req.end_time,
                num_people: req.num_people,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(reservation)))
}

/// POST /api/reservations/{id}/confirm
pub async fn confirm_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let reservation = state.reservation_service.confirm(&auth, id).await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// POST /api/reservations/{id}/cancel
pub async fn cancel_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let reservation = state.reservation_service.cancel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// DELETE /api/reservations/{id}
///
/// Admin alias for cancellation; the record is kept as history.
pub async fn delete_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.reservation_service.remove(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reservation cancelled".to_string(),
    })))
}
