//! Contact message domain entities.

pub mod model;
pub mod status;

pub use model::{ContactMessage, NewContactMessage};
pub use status::MessageStatus;
