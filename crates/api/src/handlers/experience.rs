//! Handlers for the `/experiences` resource (catalog reads).

use axum::extract::{Path, State};
use axum::Json;
use bookit_core::error::CoreError;
use bookit_core::types::DbId;
use bookit_db::models::experience::{Experience, ExperienceSummary};
use bookit_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/experiences
///
/// Catalog list: summaries only, never slot detail.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ExperienceSummary>>> {
    let experiences = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(experiences))
}

/// GET /api/v1/experiences/{id}
///
/// Full experience with its slot list filtered down to what a customer can
/// still book: sold-out slots and slots dated strictly in the past are
/// excluded from the response (they remain in storage).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Experience>> {
    let mut experience = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
        }))?;

    let today = chrono::Utc::now().date_naive();
    experience.slots.0.retain(|slot| slot.is_open_on(today));

    Ok(Json(experience))
}
