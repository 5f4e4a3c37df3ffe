use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthMagician;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SummonLink {
    #[serde(rename = "tableNumber")]
    pub table_number: u32,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SummonLinksResponse {
    pub links: Vec<SummonLink>,
}

/// Enumerate the magician's per-table summon URLs
///
/// One link per table up to the venue capacity. This is the boundary
/// the QR renderer consumes: it turns each URL into a printable code,
/// the server itself never draws images.
pub async fn list_summon_links(
    State(state): State<AppState>,
    AuthMagician(magician_id): AuthMagician,
) -> Result<Json<SummonLinksResponse>> {
    let links = (1..=state.config.table_capacity)
        .map(|table_number| SummonLink {
            table_number,
            url: state.config.summon_url(magician_id, table_number),
        })
        .collect();

    Ok(Json(SummonLinksResponse { links }))
}
