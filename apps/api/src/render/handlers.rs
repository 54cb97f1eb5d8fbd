use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::render::html::render_resume_html;
use crate::resume::handlers::UserIdQuery;
use crate::resume::schema::{validate_resume, Strictness};
use crate::resume::store;
use crate::state::AppState;

/// GET /api/v1/resume/pdf
///
/// Strict-validates the active resume, renders it to HTML, and prints it
/// through the configured PDF renderer.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let row = store::get_or_create_active(&state.db, params.user_id).await?;

    if let Err(errors) = validate_resume(&row.data.0, Strictness::Strict) {
        return Err(AppError::UnprocessableEntity(
            serde_json::to_string(&errors).unwrap_or_default(),
        ));
    }

    let html = render_resume_html(&row.data.0);
    let pdf = state
        .renderer
        .render(&html)
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}
