//! Menu item entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One dish or drink on the restaurant menu.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Dish name.
    pub name: String,
    /// Menu card description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Menu section, e.g. "entrées" or "desserts".
    pub category: String,
    /// Whether the item can currently be ordered.
    pub available: bool,
    /// Picture URL shown on the website.
    pub image_url: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodItem {
    /// Dish name.
    pub name: String,
    /// Menu card description (optional).
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Menu section.
    pub category: String,
    /// Whether the item can be ordered right away.
    pub available: bool,
    /// Picture URL (optional).
    pub image_url: Option<String>,
}

/// Replacement values for an existing menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFoodItem {
    /// Dish name.
    pub name: String,
    /// Menu card description (optional).
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Menu section.
    pub category: String,
    /// Whether the item can be ordered.
    pub available: bool,
    /// Picture URL (optional).
    pub image_url: Option<String>,
}
