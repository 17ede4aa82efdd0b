//! Contact message repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use plage_core::error::{AppError, ErrorKind};
use plage_core::result::AppResult;
use plage_entity::contact::model::NewContactMessage;
use plage_entity::contact::{ContactMessage, MessageStatus};

/// Repository for the contact form inbox.
#[derive(Debug, Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Create a new contact message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a message from the public contact form with status `new`.
    pub async fn create(&self, data: &NewContactMessage) -> AppResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (user_id, name, email, phone, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store contact message", e)
        })
    }

    /// List every message, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<ContactMessage>> {
        sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list contact messages", e)
        })
    }

    /// Move a message to a new inbox status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> AppResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update message status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Contact message {id} not found")))
    }

    /// Delete a message outright.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete contact message", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
