use axum::{
    extract::{Query, State},
    Json,
};

use crate::ats::score::{calculate_ats_score, AtsReport};
use crate::errors::AppError;
use crate::resume::handlers::UserIdQuery;
use crate::resume::store;
use crate::state::AppState;

/// GET /api/v1/resume/score
///
/// Scores the active resume as-is. Drafts are scored too: the editor polls
/// this while the user types, and the rubric handles missing fields by
/// awarding zero points rather than failing.
pub async fn handle_score(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AtsReport>, AppError> {
    let row = store::get_or_create_active(&state.db, params.user_id).await?;
    Ok(Json(calculate_ats_score(&row.data.0)))
}
