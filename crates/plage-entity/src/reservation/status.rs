//! Reservation status lifecycle.
//!
//! Every status change in the system goes through [`authorize_transition`].
//! The edge table below is the single source of truth for which moves are
//! legal and who may perform them.
//!
//! ```text
//! pending ──confirm (owner/admin)──▶ confirmed ──accept (admin)──▶ accepted
//!    │                                  │  └────deny (admin)─────▶ denied
//!    └──cancel (owner/admin)──▶ cancelled ◀──cancel (admin)───────┘
//! ```
//!
//! `accepted`, `denied` and `cancelled` are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use plage_core::{AppError, AppResult};

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Created by the customer, awaiting their confirmation.
    Pending,
    /// Confirmed by the customer, awaiting staff review.
    Confirmed,
    /// Withdrawn; never blocks a time slot again.
    Cancelled,
    /// Approved by staff.
    Accepted,
    /// Rejected by staff.
    Denied,
}

/// Who is asking for a status change, relative to the reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The user who owns the reservation.
    Owner,
    /// A staff administrator.
    Admin,
    /// Anyone else.
    Other,
}

/// The minimum privilege a transition edge demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgePolicy {
    OwnerOrAdmin,
    AdminOnly,
}

impl ReservationStatus {
    /// Statuses that hold their time slot against other bookings.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Statuses with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Denied | Self::Cancelled)
    }

    /// Look up the transition edge `self -> to`, if the lifecycle allows it.
    fn edge(&self, to: ReservationStatus) -> Option<EdgePolicy> {
        use ReservationStatus::*;
        match (self, to) {
            (Pending, Confirmed) => Some(EdgePolicy::OwnerOrAdmin),
            (Pending, Cancelled) => Some(EdgePolicy::OwnerOrAdmin),
            (Confirmed, Cancelled) => Some(EdgePolicy::AdminOnly),
            (Confirmed, Accepted) => Some(EdgePolicy::AdminOnly),
            (Confirmed, Denied) => Some(EdgePolicy::AdminOnly),
            _ => None,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
        }
    }
}

/// Check that `actor` may move a reservation from `from` to `to`.
///
/// Callers who are neither the owner nor an admin are refused outright.
/// A missing edge yields an invalid-transition error naming both statuses;
/// an existing edge that demands staff privileges yields an authorization
/// error for non-admin owners.
pub fn authorize_transition(
    from: ReservationStatus,
    to: ReservationStatus,
    actor: Actor,
) -> AppResult<()> {
    if actor == Actor::Other {
        return Err(AppError::authorization(
            "You can only manage your own reservations",
        ));
    }

    match from.edge(to) {
        None => Err(AppError::invalid_transition(from, to)),
        Some(EdgePolicy::OwnerOrAdmin) => Ok(()),
        Some(EdgePolicy::AdminOnly) if actor == Actor::Admin => Ok(()),
        Some(EdgePolicy::AdminOnly) => Err(AppError::authorization(
            "Only an administrator can perform this status change",
        )),
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            _ => Err(AppError::validation(format!(
                "Invalid reservation status: '{s}'. Expected one of: pending, confirmed, cancelled, accepted, denied"
            ))),
        }
    }
}
