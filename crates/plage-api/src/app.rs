//! Application builder — wires router + middleware + state into an Axum app.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use plage_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use plage_core::config::PlageConfig;
use plage_core::error::AppError;
use plage_database::repositories::{
    ContactMessageRepository, FoodItemRepository, FoodOrderRepository, ReservationRepository,
    UserRepository,
};
use plage_service::{ContactService, MenuService, OrderService, ReservationService, UserService};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Wires repositories, auth helpers, and services into the shared state.
pub fn build_state(config: PlageConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let reservation_repo = Arc::new(ReservationRepository::new(db_pool.clone()));
    let contact_repo = Arc::new(ContactMessageRepository::new(db_pool.clone()));
    let food_item_repo = Arc::new(FoodItemRepository::new(db_pool.clone()));
    let order_repo = Arc::new(FoodOrderRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        &config.auth,
    ));
    let reservation_service = Arc::new(ReservationService::new(Arc::clone(&reservation_repo)));
    let contact_service = Arc::new(ContactService::new(Arc::clone(&contact_repo)));
    let menu_service = Arc::new(MenuService::new(Arc::clone(&food_item_repo)));
    let order_service = Arc::new(OrderService::new(
        Arc::clone(&order_repo),
        Arc::clone(&food_item_repo),
        Arc::clone(&reservation_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        reservation_repo,
        contact_repo,
        food_item_repo,
        order_repo,
        user_service,
        reservation_service,
        contact_service,
        menu_service,
        order_service,
    }
}

/// Runs the Plage server with the given configuration and database pool.
pub async fn run_server(config: PlageConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Plage server...");

    // ── Step 1: Wire repositories and services ───────────────────
    let state = build_state(config, db_pool);

    // ── Step 2: Seed the administrator account ───────────────────
    state.user_service.seed_admin(&state.config.seed).await?;

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Plage server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
