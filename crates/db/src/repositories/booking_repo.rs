//! Repository for the `bookings` table and the booking transaction itself.

use bookit_core::error::CoreError;
use bookit_core::reference::generate_booking_reference;
use bookit_core::validation::is_valid_email;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingStatus, CreateBooking};
use crate::models::experience::Experience;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, experience_id, experience_title, slot_id, date, start_time, \
    user_full_name, user_email, number_of_people, promo_code_applied, discount_amount, \
    final_price, status, booking_reference, created_at";

const EXPERIENCE_COLUMNS: &str =
    "id, title, description, price, duration, location, image_url, slots, created_at, updated_at";

/// How many booking references to try before giving up. A collision in a
/// 36^8 space is already rare; two in a row mean something is wrong.
const MAX_REFERENCE_ATTEMPTS: u32 = 3;

/// Upper bound on waiting for another booking's row lock on the same
/// experience. Expired waits surface as [`CoreError::Timeout`].
const LOCK_TIMEOUT: &str = "5s";

/// Outcome of a single transactional attempt. A reference collision aborts
/// only the attempt; everything else is final.
enum AttemptError {
    ReferenceCollision,
    Fatal(CoreError),
}

/// Coordinates the booking transaction and reads booking rows.
pub struct BookingRepo;

impl BookingRepo {
    /// Create a booking as one atomic unit: load the experience under a row
    /// lock, check and decrement the slot's seats, write the slot back
    /// inside its parent record, and insert the booking. Everything commits
    /// or rolls back together.
    ///
    /// Validation runs before any storage access. A unique-index collision
    /// on the booking reference retries the whole transaction with a fresh
    /// reference, at most [`MAX_REFERENCE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`]: malformed input, nothing touched.
    /// - [`CoreError::NotFound`]: unknown experience or slot.
    /// - [`CoreError::InsufficientCapacity`]: slot cannot seat the party;
    ///   carries the remaining count observed under the lock.
    /// - [`CoreError::Conflict`]: reference generation exhausted retries.
    /// - [`CoreError::Timeout`]: lock wait or pool acquisition expired.
    /// - [`CoreError::Internal`]: unexpected storage failure.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, CoreError> {
        Self::create_with_generator(pool, input, generate_booking_reference).await
    }

    /// [`create`](Self::create) with a caller-supplied reference source.
    pub async fn create_with_generator<F>(
        pool: &PgPool,
        input: &CreateBooking,
        mut next_reference: F,
    ) -> Result<Booking, CoreError>
    where
        F: FnMut() -> String,
    {
        Self::validate(input)?;

        for attempt in 1..=MAX_REFERENCE_ATTEMPTS {
            let reference = next_reference();
            match Self::try_create(pool, input, &reference).await {
                Ok(booking) => return Ok(booking),
                Err(AttemptError::ReferenceCollision) => {
                    tracing::warn!(attempt, reference = %reference, "booking reference collision, retrying");
                }
                Err(AttemptError::Fatal(err)) => return Err(err),
            }
        }

        Err(CoreError::Conflict(
            "could not allocate a unique booking reference".into(),
        ))
    }

    /// Find a booking by its user-facing reference.
    pub async fn find_by_reference(
        pool: &PgPool,
        reference: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE booking_reference = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(reference)
            .fetch_optional(pool)
            .await
    }

    /// Delete every booking. Administrative reset for the seeder; normal
    /// operation never deletes bookings.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Caller-input preconditions. Runs before any storage access.
    fn validate(input: &CreateBooking) -> Result<(), CoreError> {
        if input.user_full_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Customer name must not be empty.".into(),
            ));
        }
        if !is_valid_email(&input.user_email) {
            return Err(CoreError::Validation("Invalid email format.".into()));
        }
        if input.number_of_people < 1 {
            return Err(CoreError::Validation(
                "Must book for at least 1 person.".into(),
            ));
        }
        Ok(())
    }

    /// One transactional attempt with a fixed booking reference.
    ///
    /// Dropping the transaction on any early return rolls back the seat
    /// decrement, so a failed attempt leaves no trace.
    async fn try_create(
        pool: &PgPool,
        input: &CreateBooking,
        reference: &str,
    ) -> Result<Booking, AttemptError> {
        let mut tx = pool.begin().await.map_err(fatal)?;

        // Bound the wait on a concurrent booking's row lock.
        sqlx::query(&format!("SET LOCAL lock_timeout = '{LOCK_TIMEOUT}'"))
            .execute(&mut *tx)
            .await
            .map_err(fatal)?;

        // Row-lock the experience: concurrent bookings against the same
        // experience serialize here, so the seat count read below cannot go
        // stale between check and write. Bookings against different
        // experiences do not contend.
        let query = format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = $1 FOR UPDATE");
        let mut experience = sqlx::query_as::<_, Experience>(&query)
            .bind(input.experience_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(fatal)?
            .ok_or(AttemptError::Fatal(CoreError::NotFound {
                entity: "Experience",
            }))?;

        let slot = experience
            .slots
            .0
            .iter_mut()
            .find(|slot| slot.id == input.slot_id)
            .ok_or(AttemptError::Fatal(CoreError::NotFound { entity: "Slot" }))?;

        slot.reserve(input.number_of_people)
            .map_err(AttemptError::Fatal)?;

        // Snapshot fields for the booking record before the borrow ends.
        let slot_date = slot.date;
        let slot_start_time = slot.start_time.clone();

        // Write the mutated slot back as part of the parent record.
        sqlx::query("UPDATE experiences SET slots = $2, updated_at = NOW() WHERE id = $1")
            .bind(experience.id)
            .bind(Json(&experience.slots.0))
            .execute(&mut *tx)
            .await
            .map_err(fatal)?;

        let insert = format!(
            "INSERT INTO bookings
                (experience_id, experience_title, slot_id, date, start_time,
                 user_full_name, user_email, number_of_people, promo_code_applied,
                 discount_amount, final_price, status, booking_reference)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&insert)
            .bind(input.experience_id)
            .bind(&experience.title)
            .bind(input.slot_id)
            .bind(slot_date)
            .bind(&slot_start_time)
            .bind(&input.user_full_name)
            .bind(&input.user_email)
            .bind(input.number_of_people)
            .bind(&input.promo_code_applied)
            .bind(input.discount_amount.unwrap_or(Decimal::ZERO))
            .bind(input.final_price)
            .bind(BookingStatus::Confirmed)
            .bind(reference)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                if is_reference_collision(&err) {
                    AttemptError::ReferenceCollision
                } else {
                    fatal(err)
                }
            })?;

        tx.commit().await.map_err(fatal)?;
        Ok(booking)
    }
}

/// Classify a sqlx error as a fatal attempt error.
fn fatal(err: sqlx::Error) -> AttemptError {
    AttemptError::Fatal(map_db_error(err))
}

/// Translate a sqlx error into the domain taxonomy.
///
/// Lock waits (`55P03`), cancelled statements (`57014`) and pool exhaustion
/// are retryable timeouts; anything else is internal and logged here, since
/// the API layer only reports a sanitized message.
fn map_db_error(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::PoolTimedOut => {
            CoreError::Timeout("timed out waiting for a database connection".into())
        }
        sqlx::Error::Database(db_err)
            if matches!(db_err.code().as_deref(), Some("55P03") | Some("57014")) =>
        {
            CoreError::Timeout("transaction exceeded its lock deadline".into())
        }
        _ => {
            tracing::error!(error = %err, "booking transaction failed");
            CoreError::Internal(err.to_string())
        }
    }
}

/// Whether an insert failed on the booking reference unique index.
fn is_reference_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_bookings_booking_reference")
        }
        _ => false,
    }
}
