//! Auth handlers — signup, login, me, profile.

use axum::Json;
use axum::extract::State;

use plage_core::error::AppError;
use plage_entity::user::UpdateProfile;
use plage_service::user::SignupRequest as SvcSignup;

use crate::dto::request::{LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let session = state
        .user_service
        .signup(SvcSignup {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: session.user.into(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let session = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: session.user.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/auth/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state
        .user_service
        .update_profile(
            &auth,
            UpdateProfile {
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
