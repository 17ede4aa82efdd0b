//! Reservation booking: availability, pricing, and lifecycle.

pub mod availability;
pub mod pricing;
pub mod service;

pub use service::{BookingRequest, BookingUpdate, ReservationService};
