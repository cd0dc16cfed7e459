//! Integration tests for the catalog read endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, seed_experience, slot_on};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: list returns summaries without slot detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_summaries_without_slots(pool: PgPool) {
    let future = (Utc::now() + Duration::days(3)).date_naive();
    seed_experience(&pool, "Venice Gondola Ride", vec![slot_on(future, 5, 5)]).await;
    seed_experience(&pool, "Sushi Masterclass", vec![slot_on(future, 12, 12)]).await;

    let response = get(common::build_test_app(pool), "/api/v1/experiences").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        assert!(item["title"].is_string());
        assert!(item["price"].is_number());
        assert!(item["imageUrl"].is_string());
        // The catalog list never exposes slot detail.
        assert!(item.get("slots").is_none());
    }
}

// ---------------------------------------------------------------------------
// Test: detail filters sold-out and past slots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_excludes_sold_out_and_past_slots(pool: PgPool) {
    let future = (Utc::now() + Duration::days(3)).date_naive();
    let past = (Utc::now() - Duration::days(1)).date_naive();

    let experience = seed_experience(
        &pool,
        "Venice Gondola Ride",
        vec![
            slot_on(future, 5, 5), // open, should survive
            slot_on(future, 5, 0), // sold out, filtered
            slot_on(past, 5, 5),   // in the past, filtered
        ],
    )
    .await;
    let open_slot_id = experience.slots.0[0].id;

    let uri = format!("/api/v1/experiences/{}", experience.id);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Venice Gondola Ride");

    let slots = json["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["id"], open_slot_id.to_string());
    assert_eq!(slots[0]["isSoldOut"], false);
}

// ---------------------------------------------------------------------------
// Test: unknown experience is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_experience_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/experiences/4242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
