//! Business logic for the beach restaurant backend.
//!
//! Services own the domain rules and sit between the HTTP layer and the
//! repositories. They follow constructor injection: every dependency is
//! handed over as an `Arc` at construction time, so a service can be
//! shared freely across request handlers.

pub mod contact;
pub mod context;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod user;

pub use contact::ContactService;
pub use context::RequestContext;
pub use menu::MenuService;
pub use order::OrderService;
pub use reservation::ReservationService;
pub use user::UserService;
