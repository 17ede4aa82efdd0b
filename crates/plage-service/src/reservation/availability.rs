//! Conflict detection between a requested slot and existing bookings.

use plage_entity::reservation::{Reservation, TimeSlot};

/// Find the first existing booking whose window collides with `slot`.
///
/// `existing` is expected to hold bookings for one table type on one day;
/// rows in a non-blocking status (cancelled, accepted, denied) are skipped
/// so the callers do not have to pre-filter. Windows that merely touch at
/// an endpoint do not collide.
pub fn find_conflict<'a>(slot: &TimeSlot, existing: &'a [Reservation]) -> Option<&'a Reservation> {
    existing
        .iter()
        .filter(|r| r.status.is_active())
        .find(|r| slot.overlaps(&r.slot()))
}
