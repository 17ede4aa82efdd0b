//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use plage_core::error::{AppError, ErrorKind};
use plage_core::result::AppResult;

/// Migrations compiled into the binary from the workspace `migrations/`
/// directory, so deployments never depend on files on disk.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies any migrations the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;
    info!(
        known = MIGRATOR.iter().count(),
        "Schema migrations up to date"
    );
    Ok(())
}
