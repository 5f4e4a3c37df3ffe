use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{issue_token, verify_password};
use crate::constants::ERR_EMAIL_PASSWORD_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::Magician;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "magicianId")]
    pub magician_id: i64,
}

/// Log a magician in and issue a bearer token
///
/// Unknown email and wrong password return the same 401 so the endpoint
/// does not leak which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            ERR_EMAIL_PASSWORD_REQUIRED.to_string(),
        ));
    }

    let magician = sqlx::query_as::<_, Magician>(
        "SELECT id, email, password_hash, paused, created_at FROM magicians WHERE email = ?",
    )
    .bind(&payload.email)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    let password = payload.password.clone();
    let hash = magician.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;

    if !matches {
        tracing::info!("Failed login attempt for magician {}", magician.id);
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(
        magician.id,
        &magician.email,
        &state.config.jwt_secret,
        state.config.token_ttl_days,
    )?;

    Ok(Json(LoginResponse {
        token,
        magician_id: magician.id,
    }))
}
