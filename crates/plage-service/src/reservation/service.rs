//! Reservation booking and lifecycle orchestration.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use plage_core::error::ErrorKind;
use plage_core::{AppError, AppResult};
use plage_database::repositories::ReservationRepository;
use plage_entity::reservation::{
    Actor, NewReservation, Reservation, ReservationChanges, ReservationStatus,
    ReservationWithOwner, TableType, TimeSlot, authorize_transition, catalog, slot,
};

use crate::context::RequestContext;
use crate::reservation::{availability, pricing};

/// A booking request as submitted by a customer.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub table_type: String,
    pub reservation_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub num_people: i32,
}

/// A partial edit of an existing reservation. Absent fields keep their
/// stored value; `status` is a separate admin-only decision path.
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub table_type: Option<String>,
    pub reservation_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub num_people: Option<i32>,
    pub status: Option<String>,
}

/// Service for creating, editing, and moving reservations through their
/// lifecycle.
#[derive(Debug)]
pub struct ReservationService {
    reservations: Arc<ReservationRepository>,
}

impl ReservationService {
    pub fn new(reservations: Arc<ReservationRepository>) -> Self {
        Self { reservations }
    }

    /// The bookable table catalog.
    pub fn table_types(&self) -> &'static [TableType] {
        catalog::all()
    }

    /// Book a slot for the calling customer.
    ///
    /// Checks run in a fixed order, first failure wins: field presence,
    /// table type, party size, window sanity, then availability. A
    /// successful booking starts out `pending` at the quoted price.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: BookingRequest,
    ) -> AppResult<Reservation> {
        if request.table_type.trim().is_empty()
            || request.start_time.trim().is_empty()
            || request.end_time.trim().is_empty()
        {
            return Err(AppError::validation("All fields are required"));
        }
        let start = slot::parse_time(&request.start_time)?;
        let end = slot::parse_time(&request.end_time)?;
        let (table, window) = resolve_booking(&request.table_type, request.num_people, start, end)?;

        self.ensure_available(table.name, request.reservation_date, &window, None)
            .await?;

        let reservation = self
            .reservations
            .create(&NewReservation {
                user_id: ctx.user_id,
                table_type: table.name.to_string(),
                reservation_date: request.reservation_date,
                start_time: window.start,
                end_time: window.end,
                num_people: request.num_people,
                total_price: pricing::quote(table, &window),
            })
            .await?;

        info!(
            reservation_id = %reservation.id,
            user_id = %ctx.user_id,
            table_type = %reservation.table_type,
            date = %reservation.reservation_date,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// The calling customer's own reservations, newest booking first.
    pub async fn list_own(&self, ctx: &RequestContext) -> AppResult<Vec<Reservation>> {
        self.reservations.find_by_user(ctx.user_id).await
    }

    /// Fetch one reservation, visible to its owner and to admins.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Reservation> {
        let reservation = self.fetch(id).await?;
        if ctx.actor_for(reservation.user_id) == Actor::Other {
            return Err(AppError::authorization(
                "You can only view your own reservations",
            ));
        }
        Ok(reservation)
    }

    /// Staff review queue: `confirmed`, `accepted`, and `denied` bookings
    /// with owner contact details, most recent first.
    pub async fn list_for_review(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Vec<ReservationWithOwner>> {
        ctx.require_admin()?;
        self.reservations.find_for_review().await
    }

    /// Edit a reservation's booking fields, or (admin only) settle it.
    ///
    /// A request carrying `status` is a decision: admins may set
    /// `accepted` or `denied` on a `confirmed` reservation, nothing else.
    /// Without `status` the remaining fields are merged over the stored
    /// ones and the result revalidated as if it were a fresh booking,
    /// ignoring the reservation's own old window, then repriced.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: BookingUpdate,
    ) -> AppResult<Reservation> {
        let existing = self.fetch(id).await?;
        if ctx.actor_for(existing.user_id) == Actor::Other {
            return Err(AppError::authorization(
                "You can only manage your own reservations",
            ));
        }

        if let Some(requested) = &update.status {
            return self.decide(ctx, &existing, requested).await;
        }

        let table_name = update.table_type.as_deref().unwrap_or(&existing.table_type);
        let date = update
            .reservation_date
            .unwrap_or(existing.reservation_date);
        let start = match &update.start_time {
            Some(raw) => slot::parse_time(raw)?,
            None => existing.start_time,
        };
        let end = match &update.end_time {
            Some(raw) => slot::parse_time(raw)?,
            None => existing.end_time,
        };
        let num_people = update.num_people.unwrap_or(existing.num_people);

        let (table, window) = resolve_booking(table_name, num_people, start, end)?;
        self.ensure_available(table.name, date, &window, Some(id))
            .await?;

        let updated = self
            .reservations
            .update_fields(
                id,
                &ReservationChanges {
                    table_type: table.name.to_string(),
                    reservation_date: date,
                    start_time: window.start,
                    end_time: window.end,
                    num_people,
                    total_price: pricing::quote(table, &window),
                },
            )
            .await?;

        info!(reservation_id = %id, user_id = %ctx.user_id, "Reservation updated");
        Ok(updated)
    }

    /// Owner (or admin) confirms a pending reservation.
    pub async fn confirm(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Reservation> {
        self.transition(ctx, id, ReservationStatus::Confirmed).await
    }

    /// Owner cancels a pending reservation; admins may also cancel a
    /// confirmed one.
    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Reservation> {
        let existing = self.fetch(id).await?;
        // Strangers get refused before they learn anything about the
        // reservation's state.
        if ctx.actor_for(existing.user_id) == Actor::Other {
            return Err(AppError::authorization(
                "You can only manage your own reservations",
            ));
        }
        if existing.status == ReservationStatus::Cancelled {
            return Err(AppError::new(
                ErrorKind::InvalidTransition,
                "Reservation is already cancelled",
            ));
        }
        self.apply_transition(ctx, existing, ReservationStatus::Cancelled)
            .await
    }

    /// Admin-only removal. Nothing is deleted: the reservation is
    /// cancelled and kept as history.
    pub async fn remove(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Reservation> {
        ctx.require_admin()?;
        self.cancel(ctx, id).await
    }

    /// Admin settles a confirmed reservation as `accepted` or `denied`.
    async fn decide(
        &self,
        ctx: &RequestContext,
        existing: &Reservation,
        requested: &str,
    ) -> AppResult<Reservation> {
        if !ctx.is_admin() {
            return Err(AppError::authorization(
                "Only administrators can change a reservation status directly",
            ));
        }
        let target = ReservationStatus::from_str(requested)?;
        if !matches!(
            target,
            ReservationStatus::Accepted | ReservationStatus::Denied
        ) {
            return Err(AppError::validation(
                "Status can only be changed to 'accepted' or 'denied' here",
            ));
        }
        self.apply_transition(ctx, existing.clone(), target).await
    }

    async fn transition(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        target: ReservationStatus,
    ) -> AppResult<Reservation> {
        let existing = self.fetch(id).await?;
        self.apply_transition(ctx, existing, target).await
    }

    /// Authorize and persist a status change.
    async fn apply_transition(
        &self,
        ctx: &RequestContext,
        existing: Reservation,
        target: ReservationStatus,
    ) -> AppResult<Reservation> {
        authorize_transition(existing.status, target, ctx.actor_for(existing.user_id))?;
        let updated = self.reservations.update_status(existing.id, target).await?;
        info!(
            reservation_id = %existing.id,
            user_id = %ctx.user_id,
            from = %existing.status,
            to = %target,
            "Reservation status changed"
        );
        Ok(updated)
    }

    /// Reject the requested window if it clashes with anyone else's
    /// active booking of the same table type on the same day.
    async fn ensure_available(
        &self,
        table_type: &str,
        date: NaiveDate,
        window: &TimeSlot,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        let booked = self
            .reservations
            .find_active_on_date(table_type, date, exclude)
            .await?;
        if let Some(clash) = availability::find_conflict(window, &booked) {
            return Err(AppError::conflict(format!(
                "This slot conflicts with an existing booking from {} to {}",
                clash.start_time.format("%H:%M"),
                clash.end_time.format("%H:%M"),
            )));
        }
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }
}

/// Resolve the table and validate party size and window order, in the
/// documented order: unknown table first, capacity second, window third.
fn resolve_booking(
    table_type: &str,
    num_people: i32,
    start: NaiveTime,
    end: NaiveTime,
) -> AppResult<(&'static TableType, TimeSlot)> {
    let table = catalog::find(table_type).ok_or_else(|| {
        AppError::validation(format!("Invalid table type '{table_type}'"))
    })?;
    if !table.fits(num_people) {
        return Err(AppError::validation(format!(
            "{} accepts between {} and {} people",
            table.name, table.min_capacity, table.max_capacity
        )));
    }
    let window = TimeSlot::new(start, end)?;
    Ok((table, window))
}
