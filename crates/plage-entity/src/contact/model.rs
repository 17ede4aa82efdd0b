//! Contact message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::MessageStatus;

/// A message sent through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending account, when the sender was logged in.
    pub user_id: Option<Uuid>,
    /// Sender's name as typed into the form.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Sender's phone number (optional).
    pub phone: Option<String>,
    /// The message body.
    pub message: String,
    /// Inbox workflow status.
    pub status: MessageStatus,
    /// When the message was received.
    pub created_at: DateTime<Utc>,
    /// When the message was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to store a new contact message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactMessage {
    /// Sending account, if authenticated.
    pub user_id: Option<Uuid>,
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Sender's phone number (optional).
    pub phone: Option<String>,
    /// The message body.
    pub message: String,
}
