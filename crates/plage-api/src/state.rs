//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use plage_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use plage_core::config::PlageConfig;
use plage_database::repositories::{
    ContactMessageRepository, FoodItemRepository, FoodOrderRepository, ReservationRepository,
    UserRepository,
};
use plage_service::{ContactService, MenuService, OrderService, ReservationService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<PlageConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Reservation repository
    pub reservation_repo: Arc<ReservationRepository>,
    /// Contact message repository
    pub contact_repo: Arc<ContactMessageRepository>,
    /// Menu item repository
    pub food_item_repo: Arc<FoodItemRepository>,
    /// Food order repository
    pub order_repo: Arc<FoodOrderRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account service
    pub user_service: Arc<UserService>,
    /// Reservation service
    pub reservation_service: Arc<ReservationService>,
    /// Contact message service
    pub contact_service: Arc<ContactService>,
    /// Menu service
    pub menu_service: Arc<MenuService>,
    /// Food order service
    pub order_service: Arc<OrderService>,
}
