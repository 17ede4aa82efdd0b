//! Contact message inbox status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use plage_core::AppError;

/// Workflow status of a contact message in the staff inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "message_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Unread.
    New,
    /// Seen by staff.
    Read,
    /// Answered out-of-band.
    Replied,
    /// Filed away.
    Archived,
}

impl MessageStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            _ => Err(AppError::validation(format!(
                "Invalid message status: '{s}'. Expected one of: new, read, replied, archived"
            ))),
        }
    }
}
