//! Repository for the `experiences` table.

use bookit_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, ExperienceSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, price, duration, location, image_url, slots, created_at, updated_at";

/// Provides read and seed operations for experiences.
///
/// Booking-time mutation of an experience's slots lives in
/// [`crate::repositories::BookingRepo`], inside the booking transaction.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new experience with its embedded slots, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences
                (title, description, price, duration, location, image_url, slots)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.duration)
            .bind(&input.location)
            .bind(&input.image_url)
            .bind(Json(&input.slots))
            .fetch_one(pool)
            .await
    }

    /// List all experiences as catalog summaries, never slot detail.
    pub async fn list(pool: &PgPool) -> Result<Vec<ExperienceSummary>, sqlx::Error> {
        sqlx::query_as::<_, ExperienceSummary>(
            "SELECT id, title, price, duration, location, image_url
             FROM experiences
             ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find an experience by ID, slots included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete every experience. Used by the seeder's destroy mode; bookings
    /// must be deleted first because of the foreign key.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
