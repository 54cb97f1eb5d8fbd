use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::importer::github::GithubError;
use crate::importer::linkedin;
use crate::models::resume::ResumePatch;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GithubImportRequest {
    pub url: String,
    pub token: Option<String>,
}

/// POST /api/v1/import/linkedin
///
/// Multipart upload of a LinkedIn "Save to PDF" export. A missing file is
/// the one hard input error; unparseable content degrades to an emptier
/// patch instead.
pub async fn handle_import_linkedin(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumePatch>, AppError> {
    let mut file_bytes: Option<bytes::Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            file_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
            );
        }
    }
    let file_bytes = file_bytes.ok_or_else(|| AppError::Validation("no file provided".into()))?;

    // pdf-extract is synchronous CPU work; keep it off the runtime threads.
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&file_bytes)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
    .map_err(|e| AppError::UnprocessableEntity(format!("could not extract text from PDF: {e}")))?;

    let patch = linkedin::parse_profile_text(&text);
    info!(
        "LinkedIn import: {} experience, {} education, {} skill(s) extracted",
        patch.experience.as_ref().map_or(0, Vec::len),
        patch.education.as_ref().map_or(0, Vec::len),
        patch.skills.as_ref().map_or(0, Vec::len),
    );
    Ok(Json(patch))
}

/// POST /api/v1/import/github
pub async fn handle_import_github(
    State(state): State<AppState>,
    Json(req): Json<GithubImportRequest>,
) -> Result<Json<ResumePatch>, AppError> {
    let patch = state
        .github
        .import_profile(&req.url, req.token.as_deref())
        .await
        .map_err(|e| match e {
            GithubError::InvalidUrl(_) => AppError::Validation(e.to_string()),
            GithubError::UserNotFound => AppError::NotFound(e.to_string()),
            _ => AppError::Upstream(e.to_string()),
        })?;
    Ok(Json(patch))
}
