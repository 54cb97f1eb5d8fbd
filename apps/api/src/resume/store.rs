//! Resume persistence. Exactly one row per user is active at a time; the
//! queries here are the only writers of the `resumes` table.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRow};

/// Returns the user's active resume, creating an empty one on first access.
pub async fn get_or_create_active(pool: &PgPool, user_id: Uuid) -> Result<ResumeRow, sqlx::Error> {
    let existing: Option<ResumeRow> = sqlx::query_as(
        "SELECT * FROM resumes WHERE user_id = $1 AND is_active = TRUE LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = existing {
        return Ok(row);
    }

    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (id, user_id, data, is_active)
        VALUES ($1, $2, $3, TRUE)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(Resume::empty()))
    .fetch_one(pool)
    .await?;

    info!("Created empty active resume {} for user {user_id}", row.id);
    Ok(row)
}

/// Overwrites the active resume's document. Last write wins; there is no
/// conflict detection between concurrent sessions.
pub async fn save_active(pool: &PgPool, user_id: Uuid, data: &Resume) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE resumes SET data = $1, updated_at = NOW() WHERE user_id = $2 AND is_active = TRUE",
    )
    .bind(Json(data))
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
