//! Fixture data seeder.
//!
//! `bookit-seed` imports the demo catalog (wiping whatever is there);
//! `bookit-seed -d` destroys all data and stops.

use anyhow::{Context, Result};
use bookit_db::models::experience::{CreateExperience, Slot};
use bookit_db::repositories::{BookingRepo, ExperienceRepo};
use bookit_db::DbPool;
use chrono::{Duration, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookit_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = bookit_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    bookit_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let destroy_only = std::env::args().nth(1).as_deref() == Some("-d");

    destroy(&pool).await?;
    if destroy_only {
        tracing::info!("Data destroyed successfully");
        return Ok(());
    }

    import(&pool).await?;
    tracing::info!("Data imported successfully");
    Ok(())
}

/// Clear out all bookings and experiences. Bookings go first because of the
/// foreign key on `experience_id`.
async fn destroy(pool: &DbPool) -> Result<()> {
    let bookings = BookingRepo::delete_all(pool).await?;
    let experiences = ExperienceRepo::delete_all(pool).await?;
    tracing::info!(bookings, experiences, "Cleared existing data");
    Ok(())
}

/// Insert the demo catalog.
async fn import(pool: &DbPool) -> Result<()> {
    for input in demo_experiences() {
        let experience = ExperienceRepo::create(pool, &input).await?;
        tracing::info!(id = experience.id, title = %experience.title, "Seeded experience");
    }
    Ok(())
}

/// Build a slot `offset_days` from today. The demo slots all run two hours;
/// stored `end_time` stays authoritative for anything reading it back.
fn slot(offset_days: i64, start_time: &str, capacity: i32, available_seats: i32) -> Slot {
    let date = (Utc::now() + Duration::days(offset_days)).date_naive();
    let start = NaiveTime::parse_from_str(start_time, "%H:%M").expect("demo start time is HH:MM");
    let end = start + Duration::hours(2);

    Slot {
        id: Uuid::new_v4(),
        date,
        start_time: start_time.to_string(),
        end_time: end.format("%H:%M").to_string(),
        capacity,
        available_seats,
        is_sold_out: available_seats == 0,
    }
}

fn demo_experiences() -> Vec<CreateExperience> {
    vec![
        CreateExperience {
            title: "Venice Gondola Ride & Aperitivo".to_string(),
            description: "Experience the magic of Venice's canals with a private gondola ride, \
                          followed by a classic Italian Aperitivo."
                .to_string(),
            price: Decimal::new(9950, 2),
            duration: "1.5 hours".to_string(),
            location: "Venice, Italy".to_string(),
            image_url: "https://images.unsplash.com/photo-1549487922-b5b4a7d6e4a2".to_string(),
            slots: vec![
                slot(3, "16:00", 5, 5),
                slot(3, "18:00", 5, 2),  // limited availability
                slot(4, "10:00", 10, 0), // sold out
                slot(5, "17:00", 8, 8),
            ],
        },
        CreateExperience {
            title: "Japanese Sushi Making Masterclass".to_string(),
            description: "Learn the art of Nigiri and Maki from a seasoned Tokyo chef. All \
                          ingredients and sake tasting included."
                .to_string(),
            price: Decimal::new(7500, 2),
            duration: "3 hours".to_string(),
            location: "Kyoto, Japan".to_string(),
            image_url: "https://images.unsplash.com/photo-1596773344605-64c8d374467c".to_string(),
            slots: vec![
                slot(7, "11:00", 12, 12),
                slot(7, "15:00", 12, 1), // very limited
                slot(8, "18:30", 15, 15),
            ],
        },
        CreateExperience {
            title: "Sahara Desert Stargazing Camp".to_string(),
            description: "An overnight experience in the Moroccan desert. Includes camel trek, \
                          traditional dinner, and guided astronomy session."
                .to_string(),
            price: Decimal::new(15000, 2),
            duration: "1 Day".to_string(),
            location: "Marrakech, Morocco".to_string(),
            image_url: "https://images.unsplash.com/photo-1555734289-566d21f8a85f".to_string(),
            slots: vec![slot(14, "14:00", 20, 20), slot(21, "14:00", 15, 15)],
        },
    ]
}
