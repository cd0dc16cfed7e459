//! Booking entity model and DTOs.

use bookit_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a booking. Only `Confirmed` is produced by the
/// booking transaction; the other states exist for administrative edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A row from the `bookings` table. Immutable once written.
///
/// `experience_title`, `date` and `start_time` are snapshots taken at
/// booking time so the record stays meaningful if the experience is edited
/// later. `slot_id` is a weak reference into the experience's embedded slot
/// array, not a foreign key.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub experience_id: DbId,
    pub experience_title: String,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub user_full_name: String,
    pub user_email: String,
    pub number_of_people: i32,
    pub promo_code_applied: Option<String>,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
    pub status: BookingStatus,
    pub booking_reference: String,
    pub created_at: Timestamp,
}

/// DTO for creating a booking.
///
/// `final_price` is computed by the caller (checkout applies the promo via
/// the pricing engine); the coordinator records it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub experience_id: DbId,
    pub slot_id: Uuid,
    pub user_full_name: String,
    pub user_email: String,
    pub number_of_people: i32,
    pub final_price: Decimal,
    pub promo_code_applied: Option<String>,
    pub discount_amount: Option<Decimal>,
}

/// The slice of a booking returned to the customer after confirmation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_reference: String,
    pub experience_title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub final_price: Decimal,
}

impl From<Booking> for BookingConfirmation {
    fn from(booking: Booking) -> Self {
        Self {
            booking_reference: booking.booking_reference,
            experience_title: booking.experience_title,
            date: booking.date,
            start_time: booking.start_time,
            final_price: booking.final_price,
        }
    }
}
