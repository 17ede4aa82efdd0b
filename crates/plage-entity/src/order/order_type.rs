//! Order fulfilment type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use plage_core::AppError;

/// How a food order is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Online order, delivered to an address.
    Enligne,
    /// Eaten at the restaurant, tied to a table reservation.
    SurPlace,
}

impl OrderType {
    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enligne => "enligne",
            Self::SurPlace => "sur_place",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enligne" => Ok(Self::Enligne),
            "sur_place" => Ok(Self::SurPlace),
            _ => Err(AppError::validation(format!(
                "Invalid order type: '{s}'. Expected one of: enligne, sur_place"
            ))),
        }
    }
}
