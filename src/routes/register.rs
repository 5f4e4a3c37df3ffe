use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, issue_token};
use crate::constants::ERR_EMAIL_PASSWORD_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::Magician;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(rename = "magicianId")]
    pub magician_id: i64,
}

/// Register a new magician account
///
/// Stores a bcrypt hash of the password and issues a login token
/// immediately so the dashboard works straight after sign-up.
///
/// Returns 409 Conflict if the email is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            ERR_EMAIL_PASSWORD_REQUIRED.to_string(),
        ));
    }

    if !Magician::validate_email(&payload.email) {
        return Err(AppError::InvalidInput(
            "Invalid email address".to_string(),
        ));
    }

    // bcrypt is deliberately slow; keep it off the async runtime
    let password = payload.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

    let created_at = Utc::now().timestamp_millis();

    let result = sqlx::query(
        "INSERT INTO magicians (email, password_hash, created_at) VALUES (?, ?, ?)",
    )
    .bind(&payload.email)
    .bind(&password_hash)
    .bind(created_at)
    .execute(&state.pool)
    .await;

    let magician_id = match result {
        Ok(done) => done.last_insert_rowid(),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::info!("Registration rejected: email already taken");
            return Err(AppError::EmailTaken);
        }
        Err(e) => return Err(e.into()),
    };

    let token = issue_token(
        magician_id,
        &payload.email,
        &state.config.jwt_secret,
        state.config.token_ttl_days,
    )?;

    tracing::info!("New magician registered: id {}", magician_id);

    Ok(Json(RegisterResponse { token, magician_id }))
}
