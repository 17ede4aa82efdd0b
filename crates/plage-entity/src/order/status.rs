//! Food order kitchen workflow status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use plage_core::AppError;

/// Kitchen workflow status of a food order.
///
/// Staff move orders forward only: an order may skip `confirmed` and go
/// straight to `ready`, but `completed` is terminal and nothing moves
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Received, not yet acknowledged by the kitchen.
    Pending,
    /// Acknowledged and being prepared.
    Confirmed,
    /// Ready for pickup, delivery, or serving.
    Ready,
    /// Handed over to the customer.
    Completed,
}

impl OrderStatus {
    /// Check whether the workflow allows moving to `to` from here.
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, to),
            (Pending, Confirmed) | (Pending, Ready) | (Confirmed, Ready) | (Ready, Completed)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            _ => Err(AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: pending, confirmed, ready, completed"
            ))),
        }
    }
}
