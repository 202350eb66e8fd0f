//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; each request issues at most a handful of queries.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a lazy PostgreSQL connection pool.
///
/// No connection is attempted until the first query runs, so a missing or
/// unreachable store fails per-request (where the endpoint policy decides
/// what to do with it) instead of at boot.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS)
}

/// Create a lazy PostgreSQL connection pool with a custom connection cap.
pub fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p minilist-server -- --ignored

    #[tokio::test]
    async fn lazy_pool_needs_no_server() {
        // Port 1 has no listener; construction must still succeed.
        let pool = create_pool("postgres://minilist@127.0.0.1:1/minilist");
        assert!(pool.is_ok());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
