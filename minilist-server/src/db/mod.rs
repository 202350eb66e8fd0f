//! Persistence layer: connection pool, schema migrations and repositories

pub mod migrations;
pub mod pool;
pub mod repos;
