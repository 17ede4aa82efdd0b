//! Menu domain entities.

pub mod model;

pub use model::{CreateFoodItem, FoodItem, UpdateFoodItem};
