//! Food order domain entities.

pub mod model;
pub mod order_type;
pub mod status;

pub use model::{FoodOrder, FoodOrderItem, FoodOrderWithOwner, NewFoodOrder, NewFoodOrderItem};
pub use order_type::OrderType;
pub use status::OrderStatus;
