pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats;
use crate::importer;
use crate::render;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume lifecycle
        .route(
            "/api/v1/resume",
            get(resume::handlers::handle_get_resume).put(resume::handlers::handle_autosave),
        )
        .route(
            "/api/v1/resume/score",
            get(ats::handlers::handle_score),
        )
        .route(
            "/api/v1/resume/download",
            get(resume::handlers::handle_download),
        )
        .route(
            "/api/v1/resume/pdf",
            get(render::handlers::handle_export_pdf),
        )
        // Importers
        .route(
            "/api/v1/import/linkedin",
            post(importer::handlers::handle_import_linkedin),
        )
        .route(
            "/api/v1/import/github",
            post(importer::handlers::handle_import_github),
        )
        .with_state(state)
}
