//! Note repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Note record from database
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Note repository
pub struct NoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> NoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Notes belonging to `user_id`, most recent first, capped at `limit`.
    pub async fn list_for_user(&self, user_id: i64, limit: i64) -> Result<Vec<NoteRow>, DbError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, text, created_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
