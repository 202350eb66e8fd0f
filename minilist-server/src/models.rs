//! Request and response models for the minilist API
//!
//! Wire field names are camelCase to match what the Mini App client sends
//! and expects (`createdAt`, `initData`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NoteRow, TaskRow};

// ============================================================================
// Load
// ============================================================================

/// A task as returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for TaskItem {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// A note as returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteItem {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<NoteRow> for NoteItem {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadResponse {
    pub tasks: Vec<TaskItem>,
    pub notes: Vec<NoteItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Diagnostics>,
}

// ============================================================================
// Save
// ============================================================================

/// A task as submitted by the client. `completed` defaults to false and
/// `createdAt` to the time of the save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A note as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    #[serde(rename = "initData", default)]
    pub init_data: Option<String>,
    #[serde(default)]
    pub tasks: Vec<NewTask>,
    #[serde(default)]
    pub notes: Vec<NewNote>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Diagnostics>,
}

// ============================================================================
// Diagnostics
// ============================================================================

/// The `debug` object carried alongside responses.
///
/// `mode` distinguishes genuine success from degraded or anonymous
/// responses: "success", "no-auth" or "degraded".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub mode: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_notes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_tasks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_notes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_notes: Option<usize>,
    /// Collections that failed to load and came back empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<&'static str>,
}

impl Diagnostics {
    pub fn new(mode: &'static str) -> Self {
        Self {
            mode,
            timestamp: Utc::now(),
            user_id: None,
            loaded_tasks: None,
            loaded_notes: None,
            saved_tasks: None,
            saved_notes: None,
            requested_tasks: None,
            requested_notes: None,
            degraded: Vec::new(),
        }
    }
}
