//! Food order entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::order_type::OrderType;
use super::status::OrderStatus;

/// A food order placed by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodOrder {
    /// Unique order identifier.
    pub id: Uuid,
    /// The ordering customer.
    pub user_id: Uuid,
    /// How the order is fulfilled.
    pub order_type: OrderType,
    /// For dine-in orders, the confirmed table reservation being served.
    pub reservation_id: Option<Uuid>,
    /// For online orders, where to deliver.
    pub delivery_address: Option<String>,
    /// Sum of all line totals.
    pub total_price: Decimal,
    /// Kitchen workflow status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One line of a food order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodOrderItem {
    /// Unique line identifier.
    pub id: Uuid,
    /// The order this line belongs to.
    pub order_id: Uuid,
    /// The menu item ordered.
    pub food_item_id: Uuid,
    /// How many were ordered.
    pub quantity: i32,
    /// Menu price at the time of ordering.
    pub unit_price: Decimal,
}

/// An order row joined with the ordering account's contact details.
///
/// Used by the staff order listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FoodOrderWithOwner {
    /// The order itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: FoodOrder,
    /// Owner's login email.
    pub owner_email: String,
    /// Owner's given name.
    pub owner_first_name: Option<String>,
    /// Owner's family name.
    pub owner_last_name: Option<String>,
}

/// Data required to persist a new order with its lines.
#[derive(Debug, Clone)]
pub struct NewFoodOrder {
    /// The ordering customer.
    pub user_id: Uuid,
    /// How the order is fulfilled.
    pub order_type: OrderType,
    /// Linked reservation for dine-in orders.
    pub reservation_id: Option<Uuid>,
    /// Delivery address for online orders.
    pub delivery_address: Option<String>,
    /// Computed order total.
    pub total_price: Decimal,
    /// Priced order lines.
    pub items: Vec<NewFoodOrderItem>,
}

/// One priced line of a new order.
#[derive(Debug, Clone)]
pub struct NewFoodOrderItem {
    /// The menu item ordered.
    pub food_item_id: Uuid,
    /// How many were ordered.
    pub quantity: i32,
    /// Menu price resolved server-side.
    pub unit_price: Decimal,
}
