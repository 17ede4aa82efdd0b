//! Reservation domain entities: the booking model, its status lifecycle,
//! time slots, and the static table catalog.

pub mod catalog;
pub mod model;
pub mod slot;
pub mod status;

pub use catalog::TableType;
pub use model::{NewReservation, Reservation, ReservationChanges, ReservationWithOwner};
pub use slot::TimeSlot;
pub use status::{Actor, ReservationStatus, authorize_transition};
