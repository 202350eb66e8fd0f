//! Save endpoint: full replace of a user's tasks and notes

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use minilist_core::telegram;

use crate::db::repos::SnapshotRepo;
use crate::http::error::ApiError;
use crate::models::{Diagnostics, SaveRequest, SaveResponse};
use crate::state::AppState;

/// POST /save - replace everything persisted for the authenticated user.
///
/// Strict by contract: a missing identity is 400 and any persistence
/// failure aborts with 500. The replace runs in a single transaction, so
/// an aborted save leaves the previous snapshot untouched.
async fn save(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let pool = state.pool().ok_or(ApiError::Config)?;

    let user = telegram::parse_init_data(req.init_data.as_deref().unwrap_or_default())?;

    let (saved_tasks, saved_notes) = SnapshotRepo::new(pool)
        .replace(&user, &req.tasks, &req.notes)
        .await?;

    tracing::info!(
        "saved snapshot for user {}: {} tasks, {} notes",
        user.id,
        saved_tasks,
        saved_notes
    );

    let mut debug = Diagnostics::new("success");
    debug.user_id = Some(user.id);
    debug.saved_tasks = Some(saved_tasks);
    debug.saved_notes = Some(saved_notes);
    debug.requested_tasks = Some(req.tasks.len());
    debug.requested_notes = Some(req.notes.len());

    Ok(Json(SaveResponse {
        success: true,
        message: format!("saved {} tasks, {} notes", saved_tasks, saved_notes),
        debug: Some(debug),
    }))
}

/// Save routes
pub fn router() -> Router<AppState> {
    Router::new().route("/save", post(save))
}
