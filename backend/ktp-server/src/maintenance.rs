//! Operational endpoints, restricted to registry administrators.

use crate::{ApiError, ApiResult, AppState, CallerIdentity};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

/// POST /maintenance/checkpoint
///
/// Flush the SQLite write-ahead log into the main database file.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Json<CheckpointResponse>> {
    if !state.store.is_admin(caller.account()).await {
        return Err(ApiError::Forbidden {
            message: format!("{} is not permitted to run maintenance", caller),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    info!("Manual checkpoint requested by {}", caller);

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(state.store.pool())
        .await?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}
