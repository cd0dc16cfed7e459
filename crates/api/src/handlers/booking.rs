//! Handler for the `/bookings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookit_core::error::CoreError;
use bookit_core::types::DbId;
use bookit_db::models::booking::CreateBooking;
use bookit_db::repositories::BookingRepo;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::response::BookingCreatedResponse;
use crate::state::AppState;

/// Request body of `POST /bookings`.
///
/// Every field is optional at the deserialization layer; presence of the
/// required ones is checked in [`into_create`](Self::into_create) before
/// anything else runs, and a missing field reports as a 400 with a stable
/// message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub experience_id: Option<DbId>,
    pub slot_id: Option<Uuid>,
    pub user_full_name: Option<String>,
    pub user_email: Option<String>,
    pub number_of_people: Option<i32>,
    pub final_price: Option<Decimal>,
    pub promo_code_applied: Option<String>,
    pub discount_amount: Option<Decimal>,
}

impl CreateBookingRequest {
    /// Convert to the repository DTO, rejecting any missing required field.
    fn into_create(self) -> Result<CreateBooking, CoreError> {
        match (
            self.experience_id,
            self.slot_id,
            self.user_full_name,
            self.user_email,
            self.number_of_people,
            self.final_price,
        ) {
            (
                Some(experience_id),
                Some(slot_id),
                Some(user_full_name),
                Some(user_email),
                Some(number_of_people),
                Some(final_price),
            ) => Ok(CreateBooking {
                experience_id,
                slot_id,
                user_full_name,
                user_email,
                number_of_people,
                final_price,
                promo_code_applied: self.promo_code_applied,
                discount_amount: self.discount_amount,
            }),
            _ => Err(CoreError::Validation(
                "Missing required booking fields.".into(),
            )),
        }
    }
}

/// POST /api/v1/bookings
///
/// Runs the booking transaction and returns the confirmation snapshot. All
/// failure classification happens in the coordinator; this handler only
/// shapes the request and the 201 envelope.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let input = request.into_create()?;
    let booking = BookingRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking successfully confirmed!",
            booking: booking.into(),
        }),
    ))
}
