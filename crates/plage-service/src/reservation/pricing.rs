//! Price computation for a booked slot.

use plage_entity::reservation::{TableType, TimeSlot};
use rust_decimal::{Decimal, RoundingStrategy};

const SECONDS_PER_HOUR: i64 = 3600;

/// Price for holding `table` over `slot`.
///
/// Hourly rate times duration, with fractional cents always rounded up so
/// a quote is never below the exact product. The rate is scaled by whole
/// seconds and divided last: a recurring fraction of an hour must not
/// nudge an exact product across a cent boundary.
pub fn quote(table: &TableType, slot: &TimeSlot) -> Decimal {
    let seconds = Decimal::from(slot.duration_seconds());
    (table.price_per_hour * seconds / Decimal::from(SECONDS_PER_HOUR))
        .round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
}
