use std::sync::Arc;

use sqlx::PgPool;

use crate::importer::github::GithubClient;
use crate::render::pdf::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub github: GithubClient,
    /// Pluggable PDF renderer. Default: ChromiumRenderer via CHROMIUM_BIN.
    pub renderer: Arc<dyn PdfRenderer>,
}
