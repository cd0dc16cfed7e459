//! Response envelope types for API handlers.
//!
//! Mutating endpoints return a `message` alongside their payload; using
//! typed envelopes instead of ad-hoc `serde_json::json!` keeps the wire
//! shapes compile-checked.

use bookit_db::models::booking::BookingConfirmation;
use rust_decimal::Decimal;
use serde::Serialize;

/// Body of a successful `POST /bookings`.
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: &'static str,
    pub booking: BookingConfirmation,
}

/// Body of a successful `POST /promo/validate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoValidatedResponse {
    pub message: &'static str,
    pub promo_code: String,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
}

/// Body of a rejected promo code: no discount, price unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoRejectedResponse {
    pub message: &'static str,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
}
