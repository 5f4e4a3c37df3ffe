//! Password hashing and bearer-token authentication
//!
//! Registration stores a bcrypt hash of the password; login verifies it
//! and issues a signed JWT carrying the magician id. Authenticated
//! routes extract `Authorization: Bearer <token>` via [`AuthMagician`].

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::AppState;

/// Claims carried by an issued login token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Magician id
    pub sub: i64,
    pub email: String,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Hash a password for storage. Blocking; call from `spawn_blocking`
/// inside handlers.
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Check a password against a stored hash. Blocking, like
/// [`hash_password`].
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Issue a signed token for a freshly registered or logged-in magician
pub fn issue_token(magician_id: i64, email: &str, secret: &str, ttl_days: i64) -> Result<String> {
    let claims = Claims {
        sub: magician_id,
        email: email.to_string(),
        exp: (Utc::now() + Duration::days(ttl_days)).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Decode and validate a token, returning its claims
///
/// Expiry is checked by the default validation; a tampered or expired
/// token fails here and surfaces as 401.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

/// Extractor for the authenticated magician id on dashboard routes
pub struct AuthMagician(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthMagician {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::MissingToken)?;

        let claims = decode_token(token, &state.config.jwt_secret)?;

        Ok(AuthMagician(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn test_token_round_trip() {
        let token = issue_token(42, "merlin@example.com", SECRET, 7).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "merlin@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = issue_token(42, "merlin@example.com", SECRET, 7).unwrap();
        assert!(decode_token(&token, "some-other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL puts the expiry in the past
        let token = issue_token(42, "merlin@example.com", SECRET, -1).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("abracadabra").unwrap();

        assert_ne!(hash, "abracadabra");
        assert!(verify_password("abracadabra", &hash).unwrap());
        assert!(!verify_password("alakazam", &hash).unwrap());
    }
}
