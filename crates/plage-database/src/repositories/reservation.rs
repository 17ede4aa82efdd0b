//! Reservation repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use plage_core::error::{AppError, ErrorKind};
use plage_core::result::AppResult;
use plage_entity::reservation::model::{
    NewReservation, Reservation, ReservationChanges, ReservationWithOwner,
};
use plage_entity::reservation::status::ReservationStatus;

/// Name of the exclusion constraint that forbids two active bookings of
/// the same table type over overlapping windows. The application-level
/// availability check runs first; the constraint is the backstop that
/// decides races between concurrent writers.
const OVERLAP_CONSTRAINT: &str = "reservations_no_overlap";

/// Repository for reservation CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reservation by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation by id", e)
            })
    }

    /// List a customer's reservations, newest booking first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = $1 \
             ORDER BY reservation_date DESC, start_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user reservations", e)
        })
    }

    /// List the slot-holding reservations for one table type on one day.
    ///
    /// Only `pending` and `confirmed` rows hold their slot. `exclude`
    /// omits one reservation, used when re-checking an edit against
    /// everyone else's bookings.
    pub async fn find_active_on_date(
        &self,
        table_type: &str,
        date: NaiveDate,
        exclude: Option<Uuid>,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE table_type = $1 AND reservation_date = $2 \
               AND status IN ('pending', 'confirmed') \
               AND ($3::uuid IS NULL OR id <> $3) \
             ORDER BY start_time ASC",
        )
        .bind(table_type)
        .bind(date)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to scan bookings for slot", e)
        })
    }

    /// Persist a new reservation with status `pending`.
    pub async fn create(&self, data: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations \
             (user_id, table_type, reservation_date, start_time, end_time, num_people, total_price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.table_type)
        .bind(data.reservation_date)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.num_people)
        .bind(data.total_price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_overlap_constraint)
    }

    /// Replace a reservation's booking fields and price.
    pub async fn update_fields(
        &self,
        id: Uuid,
        changes: &ReservationChanges,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations \
             SET table_type = $2, reservation_date = $3, start_time = $4, end_time = $5, \
                 num_people = $6, total_price = $7, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.table_type)
        .bind(changes.reservation_date)
        .bind(changes.start_time)
        .bind(changes.end_time)
        .bind(changes.num_people)
        .bind(changes.total_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_overlap_constraint)?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// Move a reservation to a new status.
    ///
    /// Legality of the move has already been decided by the lifecycle
    /// rules; this only writes it.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update reservation status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// List reservations for staff review, joined with owner contact
    /// details: `confirmed`, `accepted`, and `denied` rows only, most
    /// recent booking date and start time first.
    pub async fn find_for_review(&self) -> AppResult<Vec<ReservationWithOwner>> {
        sqlx::query_as::<_, ReservationWithOwner>(
            "SELECT r.*, u.email AS owner_email, \
                    u.first_name AS owner_first_name, u.last_name AS owner_last_name \
             FROM reservations r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.status IN ('confirmed', 'accepted', 'denied') \
             ORDER BY r.reservation_date DESC, r.start_time DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations for review", e)
        })
    }
}

/// Map a violation of the overlap exclusion constraint to the conflict
/// error a losing concurrent booking should see.
fn map_overlap_constraint(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(OVERLAP_CONSTRAINT) => {
            AppError::conflict("This time slot was just booked by someone else")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to write reservation", e),
    }
}
