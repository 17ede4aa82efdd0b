//! Contact form intake and the admin inbox.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use plage_core::{AppError, AppResult};
use plage_database::repositories::ContactMessageRepository;
use plage_entity::contact::{ContactMessage, MessageStatus, NewContactMessage};

use crate::context::RequestContext;

/// A message submitted through the public contact form.
#[derive(Debug, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Service for contact messages: public intake, staff inbox.
#[derive(Debug)]
pub struct ContactService {
    messages: Arc<ContactMessageRepository>,
}

impl ContactService {
    pub fn new(messages: Arc<ContactMessageRepository>) -> Self {
        Self { messages }
    }

    /// Accept a contact form submission.
    ///
    /// The form is public; `user_id` links the message to an account when
    /// the sender happened to be logged in.
    pub async fn submit(
        &self,
        user_id: Option<Uuid>,
        request: ContactRequest,
    ) -> AppResult<ContactMessage> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.message.trim().is_empty()
        {
            return Err(AppError::validation("Name, email and message are required"));
        }
        if !request.email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }

        let saved = self
            .messages
            .create(&NewContactMessage {
                user_id,
                name: request.name.trim().to_string(),
                email: request.email.trim().to_string(),
                phone: request.phone,
                message: request.message,
            })
            .await?;

        info!(message_id = %saved.id, "Contact message received");
        Ok(saved)
    }

    /// The full inbox, newest first. Staff only.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<ContactMessage>> {
        ctx.require_admin()?;
        self.messages.find_all().await
    }

    /// Move a message through the inbox workflow. Staff only.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: &str,
    ) -> AppResult<ContactMessage> {
        ctx.require_admin()?;
        let status = MessageStatus::from_str(status)?;
        let updated = self.messages.update_status(id, status).await?;
        info!(message_id = %id, status = %status, "Contact message status changed");
        Ok(updated)
    }

    /// Delete a message from the inbox. Staff only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        if !self.messages.delete(id).await? {
            return Err(AppError::not_found(format!(
                "Contact message {id} not found"
            )));
        }
        info!(message_id = %id, "Contact message deleted");
        Ok(())
    }
}
