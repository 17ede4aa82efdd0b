//! Reservation entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::slot::TimeSlot;
use super::status::ReservationStatus;

/// A table booking for one date and time window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// The customer who owns the booking.
    pub user_id: Uuid,
    /// Catalog name of the booked table type.
    pub table_type: String,
    /// Day of the booking.
    pub reservation_date: NaiveDate,
    /// Window start (inclusive).
    pub start_time: NaiveTime,
    /// Window end (exclusive).
    pub end_time: NaiveTime,
    /// Party size.
    pub num_people: i32,
    /// Total rental price for the window.
    pub total_price: Decimal,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The booked time window.
    ///
    /// Stored rows always satisfy `start_time < end_time`, so this never
    /// needs the validating constructor.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Data required to persist a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    /// The owning customer.
    pub user_id: Uuid,
    /// Catalog name of the table type.
    pub table_type: String,
    /// Day of the booking.
    pub reservation_date: NaiveDate,
    /// Window start.
    pub start_time: NaiveTime,
    /// Window end.
    pub end_time: NaiveTime,
    /// Party size.
    pub num_people: i32,
    /// Computed total price.
    pub total_price: Decimal,
}

/// Validated field changes for an existing reservation.
///
/// Produced by the reservation service after re-running the booking
/// checks; carries the full replacement values including the reprice.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    /// Catalog name of the table type.
    pub table_type: String,
    /// Day of the booking.
    pub reservation_date: NaiveDate,
    /// Window start.
    pub start_time: NaiveTime,
    /// Window end.
    pub end_time: NaiveTime,
    /// Party size.
    pub num_people: i32,
    /// Recomputed total price.
    pub total_price: Decimal,
}

/// A reservation row joined with its owner's contact details.
///
/// Used by the staff review listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReservationWithOwner {
    /// The reservation itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub reservation: Reservation,
    /// Owner's login email.
    pub owner_email: String,
    /// Owner's given name.
    pub owner_first_name: Option<String>,
    /// Owner's family name.
    pub owner_last_name: Option<String>,
}
