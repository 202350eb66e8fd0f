//! Snapshot repository: the replace-on-save sequence
//!
//! The client sends its whole list state on every save. The sequence
//! (upsert user, delete tasks, delete notes, insert tasks, insert notes)
//! runs inside a single transaction, so a failure at any step rolls back
//! and the previous snapshot stays intact.

use chrono::{DateTime, Utc};
use minilist_core::telegram::TgUser;
use minilist_core::text::{clip, NOTE_TEXT_MAX, TASK_TEXT_MAX};
use sqlx::PgPool;

use super::DbError;
use crate::models::{NewNote, NewTask};

/// Snapshot repository
pub struct SnapshotRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SnapshotRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace everything persisted for `user` with the supplied lists.
    ///
    /// Empty input lists still delete - the net effect is clearing. Task
    /// text is clipped to 500 chars, note text to 1000; a missing
    /// `createdAt` defaults to now. Returns (saved tasks, saved notes).
    pub async fn replace(
        &self,
        user: &TgUser,
        tasks: &[NewTask],
        notes: &[NewNote],
    ) -> Result<(u64, u64), DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, username, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                username = EXCLUDED.username,
                updated_at = NOW()
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(user.last_name.as_deref())
        .bind(user.username.as_deref())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM notes WHERE user_id = $1")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        let now = Utc::now();

        let mut saved_tasks = 0;
        if !tasks.is_empty() {
            let texts: Vec<String> = tasks
                .iter()
                .map(|t| clip(&t.text, TASK_TEXT_MAX).to_owned())
                .collect();
            let completed: Vec<bool> = tasks.iter().map(|t| t.completed).collect();
            let created: Vec<DateTime<Utc>> =
                tasks.iter().map(|t| t.created_at.unwrap_or(now)).collect();

            saved_tasks = sqlx::query(
                r#"
                INSERT INTO tasks (user_id, text, completed, created_at)
                SELECT $1, t.text, t.completed, t.created_at
                FROM UNNEST($2::text[], $3::boolean[], $4::timestamptz[])
                    AS t(text, completed, created_at)
                "#,
            )
            .bind(user.id)
            .bind(&texts)
            .bind(&completed)
            .bind(&created)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        let mut saved_notes = 0;
        if !notes.is_empty() {
            let texts: Vec<String> = notes
                .iter()
                .map(|n| clip(&n.text, NOTE_TEXT_MAX).to_owned())
                .collect();
            let created: Vec<DateTime<Utc>> =
                notes.iter().map(|n| n.created_at.unwrap_or(now)).collect();

            saved_notes = sqlx::query(
                r#"
                INSERT INTO notes (user_id, text, created_at)
                SELECT $1, n.text, n.created_at
                FROM UNNEST($2::text[], $3::timestamptz[]) AS n(text, created_at)
                "#,
            )
            .bind(user.id)
            .bind(&texts)
            .bind(&created)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok((saved_tasks, saved_notes))
    }
}
