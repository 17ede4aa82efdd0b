//! Route definitions for the Plage HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(reservation_routes())
        .merge(contact_routes())
        .merge(menu_routes())
        .merge(order_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, me, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/profile", get(handlers::auth::get_profile))
        .route("/auth/profile", put(handlers::auth::update_profile))
}

/// Reservation booking and lifecycle endpoints
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations/table-types",
            get(handlers::reservations::list_table_types),
        )
        .route("/reservations", post(handlers::reservations::create_reservation))
        .route(
            "/reservations/my-reservations",
            get(handlers::reservations::my_reservations),
        )
        .route(
            "/reservations/admin/all",
            get(handlers::reservations::admin_list_reservations),
        )
        .route(
            "/reservations/{id}",
            get(handlers::reservations::get_reservation),
        )
        .route(
            "/reservations/{id}",
            put(handlers::reservations::update_reservation),
        )
        .route(
            "/reservations/{id}",
            delete(handlers::reservations::delete_reservation),
        )
        .route(
            "/reservations/{id}/confirm",
            post(handlers::reservations::confirm_reservation),
        )
        .route(
            "/reservations/{id}/cancel",
            post(handlers::reservations::cancel_reservation),
        )
}

/// Contact form and staff inbox endpoints
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact-messages",
            post(handlers::contact_messages::create_message),
        )
        .route(
            "/contact-messages/admin/all",
            get(handlers::contact_messages::admin_list_messages),
        )
        .route(
            "/contact-messages/admin/{id}/status",
            put(handlers::contact_messages::admin_update_message_status),
        )
        .route(
            "/contact-messages/admin/{id}",
            delete(handlers::contact_messages::admin_delete_message),
        )
}

/// Menu card and staff catalogue endpoints
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/food-items", get(handlers::food_items::list_food_items))
        .route("/food-items", post(handlers::food_items::create_food_item))
        .route(
            "/food-items/admin/all",
            get(handlers::food_items::admin_list_food_items),
        )
        .route(
            "/food-items/{id}",
            put(handlers::food_items::update_food_item),
        )
        .route(
            "/food-items/{id}",
            delete(handlers::food_items::delete_food_item),
        )
}

/// Food order endpoints
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(handlers::orders::create_order))
        .route("/orders/my-orders", get(handlers::orders::my_orders))
        .route("/orders/admin/all", get(handlers::orders::admin_list_orders))
        .route(
            "/orders/admin/{id}/status",
            put(handlers::orders::admin_update_order_status),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::readiness))
}
