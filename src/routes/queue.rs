use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthMagician;
use crate::error::Result;
use crate::models::SummonEntry;
use crate::queue;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QueueResponse {
    pub paused: bool,
    pub summons: Vec<SummonEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ClearTableRequest {
    #[serde(rename = "tableNumber")]
    pub table_number: i64,
}

#[derive(Debug, Serialize)]
pub struct ClearTableResponse {
    pub ok: bool,
}

/// Dashboard poll: the logged-in magician's queue, oldest request
/// first, plus the live/paused status in the same response.
pub async fn get_queue(
    State(state): State<AppState>,
    AuthMagician(magician_id): AuthMagician,
) -> Result<Json<QueueResponse>> {
    let view = queue::list_queue(&state.pool, magician_id).await?;

    Ok(Json(QueueResponse {
        paused: view.paused,
        summons: view.entries,
    }))
}

/// Remove a visited table from the queue
///
/// Idempotent: clearing a table that is not queued still returns ok.
pub async fn clear_table(
    State(state): State<AppState>,
    AuthMagician(magician_id): AuthMagician,
    Json(payload): Json<ClearTableRequest>,
) -> Result<Json<ClearTableResponse>> {
    queue::clear_table(
        &state.pool,
        magician_id,
        payload.table_number,
        state.config.table_capacity,
    )
    .await?;

    Ok(Json(ClearTableResponse { ok: true }))
}
