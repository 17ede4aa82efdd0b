//! Request DTOs with validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Create reservation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// Catalog table type name.
    #[validate(length(min = 1, message = "Table type is required"))]
    pub table_type: String,
    /// Day of the booking.
    pub reservation_date: NaiveDate,
    /// Window start, `HH:MM`.
    pub start_time: String,
    /// Window end, `HH:MM`.
    pub end_time: String,
    /// Party size.
    pub num_people: i32,
}

/// Update reservation request. Absent fields keep their stored value;
/// `status` is the admin decision path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    /// New table type.
    pub table_type: Option<String>,
    /// New booking day.
    pub reservation_date: Option<NaiveDate>,
    /// New window start.
    pub start_time: Option<String>,
    /// New window end.
    pub end_time: Option<String>,
    /// New party size.
    pub num_people: Option<i32>,
    /// Decision status (`accepted` or `denied`), admin only.
    pub status: Option<String>,
}

/// Contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    /// Sender name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Sender email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Sender phone number.
    pub phone: Option<String>,
    /// The message.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Contact message status change (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageStatusRequest {
    /// Target inbox status.
    pub status: String,
}

/// Create menu item request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFoodItemRequest {
    /// Dish name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Menu card description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Menu section.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    /// Whether the item can be ordered right away.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Picture URL.
    pub image_url: Option<String>,
}

/// Update menu item request (admin). Full replacement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFoodItemRequest {
    /// Dish name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Menu card description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Menu section.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    /// Whether the item can be ordered.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Picture URL.
    pub image_url: Option<String>,
}

/// Create food order request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Fulfilment type: `enligne` or `sur_place`.
    pub order_type: String,
    /// Linked reservation for dine-in orders.
    pub reservation_id: Option<Uuid>,
    /// Delivery address for online orders.
    pub delivery_address: Option<String>,
    /// Order lines.
    pub items: Vec<OrderItemRequest>,
}

/// One requested order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    /// Which menu item.
    pub food_item_id: Uuid,
    /// How many.
    pub quantity: i32,
}

/// Order status change (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// Target kitchen status.
    pub status: String,
}

fn default_available() -> bool {
    true
}
