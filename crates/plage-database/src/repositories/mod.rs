//! Repository implementations for all Plage entities.

pub mod contact;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod user;

pub use contact::ContactMessageRepository;
pub use menu::FoodItemRepository;
pub use order::FoodOrderRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;
