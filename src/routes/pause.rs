use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthMagician;
use crate::error::Result;
use crate::queue;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetPausedRequest {
    pub paused: bool,
}

#[derive(Debug, Serialize)]
pub struct SetPausedResponse {
    pub paused: bool,
}

/// Toggle the magician's pause flag
///
/// Pausing changes what guests are told when they scan; requests keep
/// flowing into the queue either way.
pub async fn set_paused(
    State(state): State<AppState>,
    AuthMagician(magician_id): AuthMagician,
    Json(payload): Json<SetPausedRequest>,
) -> Result<Json<SetPausedResponse>> {
    let paused = queue::set_paused(&state.pool, magician_id, payload.paused).await?;

    tracing::info!(
        "Magician {} is now {}",
        magician_id,
        if paused { "paused" } else { "live" }
    );

    Ok(Json(SetPausedResponse { paused }))
}
