use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeRow};
use crate::resume::schema::{validate_resume, Strictness};
use crate::resume::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct AutosaveRequest {
    pub user_id: Uuid,
    /// The draft document as sent by the editor. Deserialized permissively;
    /// a payload that does not fit the canonical shape is dropped, not
    /// rejected.
    pub data: serde_json::Value,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_or_create_active(&state.db, params.user_id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/resume
///
/// Autosave. Always answers 204: a transiently invalid draft or a storage
/// hiccup must never crash the editing session. Failures are logged and the
/// next successful save supersedes them (last write wins).
pub async fn handle_autosave(
    State(state): State<AppState>,
    Json(req): Json<AutosaveRequest>,
) -> StatusCode {
    let draft: Resume = match serde_json::from_value(req.data) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!("Autosave dropped for user {}: {e}", req.user_id);
            return StatusCode::NO_CONTENT;
        }
    };

    if let Err(errors) = validate_resume(&draft, Strictness::Draft) {
        tracing::warn!(
            "Autosave draft validation failed for user {}: {} field(s)",
            req.user_id,
            errors.len()
        );
        return StatusCode::NO_CONTENT;
    }

    // First save of a brand-new user may race the row creation; make sure
    // the active row exists before writing.
    let saved = match store::save_active(&state.db, req.user_id, &draft).await {
        Ok(true) => true,
        Ok(false) => match store::get_or_create_active(&state.db, req.user_id).await {
            Ok(_) => store::save_active(&state.db, req.user_id, &draft)
                .await
                .unwrap_or(false),
            Err(e) => {
                tracing::error!("Autosave failed for user {}: {e}", req.user_id);
                false
            }
        },
        Err(e) => {
            tracing::error!("Autosave failed for user {}: {e}", req.user_id);
            false
        }
    };

    if !saved {
        tracing::warn!("Autosave not persisted for user {}", req.user_id);
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/resume/download
///
/// Strict-validated JSON export. Unlike autosave, a malformed document is a
/// hard failure here: whatever leaves the system must be well-formed.
pub async fn handle_download(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let row = store::get_or_create_active(&state.db, params.user_id).await?;

    if let Err(errors) = validate_resume(&row.data.0, Strictness::Strict) {
        return Err(AppError::UnprocessableEntity(
            serde_json::to_string(&errors).unwrap_or_default(),
        ));
    }

    let body = serde_json::to_vec_pretty(&row.data.0)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("resume serialization failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.json\"",
            ),
        ],
        body,
    )
        .into_response())
}
