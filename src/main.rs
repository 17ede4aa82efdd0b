//! Plage server — backend for the beach restaurant website.
//!
//! Entry point that loads configuration, connects to PostgreSQL, and
//! hands off to the HTTP layer.

use tracing_subscriber::{EnvFilter, fmt};

use plage_core::config::PlageConfig;
use plage_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Loads `config/default.toml`, the `PLAGE_ENV` overlay, and `PLAGE_`
/// environment variables, in that order.
fn load_configuration() -> Result<PlageConfig, AppError> {
    let env = std::env::var("PLAGE_ENV").unwrap_or_else(|_| "development".to_string());
    PlageConfig::load(&env)
}

/// Initializes tracing. `RUST_LOG` wins over the configured level.
fn init_logging(config: &PlageConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

async fn run(config: PlageConfig) -> Result<(), AppError> {
    tracing::info!("Starting Plage v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = plage_database::create_pool(&config.database).await?;
    plage_database::run_migrations(&db_pool).await?;

    plage_api::run_server(config, db_pool).await
}
