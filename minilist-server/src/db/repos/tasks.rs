//! Task repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Task record from database
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Tasks belonging to `user_id`, most recent first, capped at `limit`.
    pub async fn list_for_user(&self, user_id: i64, limit: i64) -> Result<Vec<TaskRow>, DbError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, text, completed, created_at
            FROM tasks
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p minilist-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_user_has_no_tasks() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations");

        let rows = TaskRepo::new(&pool)
            .list_for_user(i64::MIN, 100)
            .await
            .expect("query failed");
        assert!(rows.is_empty());
    }
}
