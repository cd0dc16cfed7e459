//! Experience entity model and its embedded slot documents.

use bookit_core::error::CoreError;
use bookit_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `experiences` table.
///
/// Slots are embedded in the `slots` JSONB column (composition, not a
/// separate table). Deleting the experience deletes its slots.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    /// Display label, e.g. `"2 hours"` or `"1 Day"`.
    pub duration: String,
    pub location: String,
    pub image_url: String,
    pub slots: Json<Vec<Slot>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary projection for the catalog list; no slot detail.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub id: DbId,
    pub title: String,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub image_url: String,
}

/// One bookable time window, stored inside its experience's `slots` column.
///
/// `end_time` is authoritative stored data; nothing re-derives it from
/// `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub date: NaiveDate,
    /// `"HH:MM"`, e.g. `"10:00"`.
    pub start_time: String,
    /// `"HH:MM"`, e.g. `"12:00"`.
    pub end_time: String,
    pub capacity: i32,
    pub available_seats: i32,
    pub is_sold_out: bool,
}

impl Slot {
    /// Take `party_size` seats off the slot.
    ///
    /// Keeps `is_sold_out` in lockstep with the seat count. Must only be
    /// called while the owning experience row is locked, so the observed
    /// seat count is authoritative.
    ///
    /// # Errors
    ///
    /// [`CoreError::InsufficientCapacity`] with the remaining count when the
    /// slot cannot seat the party; the slot is left untouched.
    pub fn reserve(&mut self, party_size: i32) -> Result<(), CoreError> {
        if self.available_seats < party_size {
            return Err(CoreError::InsufficientCapacity {
                remaining: self.available_seats,
            });
        }
        self.available_seats -= party_size;
        if self.available_seats == 0 {
            self.is_sold_out = true;
        }
        Ok(())
    }

    /// Whether the slot should appear in customer-facing availability:
    /// not sold out and not dated strictly in the past.
    pub fn is_open_on(&self, today: NaiveDate) -> bool {
        !self.is_sold_out && self.date >= today
    }
}

/// DTO for inserting an experience (used by the seeder and tests).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperience {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub image_url: String,
    pub slots: Vec<Slot>,
}
