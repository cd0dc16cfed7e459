pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET  /experiences          catalog list (summaries, no slots)
/// GET  /experiences/{id}     experience detail with open future slots
/// POST /bookings             run the booking transaction
/// POST /promo/validate       validate a promo code against a price
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/experiences", get(handlers::experience::list))
        .route("/experiences/{id}", get(handlers::experience::get_by_id))
        .route("/bookings", post(handlers::booking::create))
        .route("/promo/validate", post(handlers::promo::validate))
}
