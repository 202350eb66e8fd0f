//! Repository implementations for database access
//!
//! - Tasks and notes are read per-collection so the load endpoint can
//!   degrade them independently.
//! - The replace-on-save sequence runs in a single transaction.

pub mod notes;
pub mod snapshot;
pub mod tasks;

pub use notes::{NoteRepo, NoteRow};
pub use snapshot::SnapshotRepo;
pub use tasks::{TaskRepo, TaskRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
