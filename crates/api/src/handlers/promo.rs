//! Handler for promo code validation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookit_core::error::CoreError;
use bookit_core::pricing;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{PromoRejectedResponse, PromoValidatedResponse};

/// Request body of `POST /promo/validate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatePromoRequest {
    pub code: Option<String>,
    pub original_price: Option<Decimal>,
}

/// POST /api/v1/promo/validate
///
/// A recognized code answers 200 with the quote. An unknown code answers
/// 404 but still tells the caller what to charge: zero discount, price
/// unchanged. Malformed payloads are a 400.
pub async fn validate(Json(request): Json<ValidatePromoRequest>) -> AppResult<Response> {
    let (Some(code), Some(original_price)) = (request.code, request.original_price) else {
        return Err(AppError::BadRequest(
            "Invalid request payload for promo validation.".into(),
        ));
    };

    match pricing::compute_discount(&code, original_price) {
        Ok(quote) => Ok((
            StatusCode::OK,
            Json(PromoValidatedResponse {
                message: "Promo code applied successfully",
                promo_code: quote.code,
                discount_amount: quote.discount_amount,
                final_price: quote.final_price,
            }),
        )
            .into_response()),
        Err(CoreError::NotFound { .. }) => Ok((
            StatusCode::NOT_FOUND,
            Json(PromoRejectedResponse {
                message: "Invalid promo code",
                discount_amount: Decimal::ZERO,
                final_price: original_price,
            }),
        )
            .into_response()),
        Err(err) => Err(err.into()),
    }
}
