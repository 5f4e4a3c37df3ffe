use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_INVALID_SUMMON_LINK, MSG_SUMMON_LIVE, MSG_SUMMON_PAUSED};
use crate::error::{AppError, Result};
use crate::queue;
use crate::AppState;

/// Query parameters baked into each table's QR code:
/// `/summon?m=<magician>&t=<table>`
#[derive(Debug, Deserialize)]
pub struct SummonParams {
    #[serde(default)]
    pub m: Option<i64>,
    #[serde(default)]
    pub t: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SummonResponse {
    pub accepted: bool,
    pub paused: bool,
    pub message: String,
}

/// Guest-facing summon endpoint (public, no auth)
///
/// Records the table's request and tells the guest what to expect.
/// Repeat scans of the same table coalesce into one queue entry, so the
/// confirmation makes no distinction between a new and a repeated
/// request. A paused magician still ingests the request but the guest
/// gets the "mid-performance" message instead.
///
/// Malformed or out-of-range links get 400; a link pointing at a
/// magician that does not exist gets 404 rather than a fake
/// confirmation.
pub async fn summon_table(
    State(state): State<AppState>,
    Query(params): Query<SummonParams>,
) -> Result<Json<SummonResponse>> {
    let magician_id = params
        .m
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_SUMMON_LINK.to_string()))?;
    let table_number = params
        .t
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_SUMMON_LINK.to_string()))?;

    let now_ms = Utc::now().timestamp_millis();

    let paused = queue::summon(
        &state.pool,
        magician_id,
        table_number,
        state.config.table_capacity,
        now_ms,
    )
    .await?;

    let message = if paused {
        MSG_SUMMON_PAUSED
    } else {
        MSG_SUMMON_LIVE
    };

    Ok(Json(SummonResponse {
        accepted: true,
        paused,
        message: message.to_string(),
    }))
}
