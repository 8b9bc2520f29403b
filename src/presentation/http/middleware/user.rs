use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::http::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

pub fn decode_optional_user_claims(headers: &HeaderMap, secret: &str) -> Option<UserClaims> {
    let token = extract_bearer_token(headers)?;
    decode::<UserClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

pub fn decode_required_user_claims(
    headers: &HeaderMap,
    secret: &str,
) -> Result<UserClaims, AppError> {
    decode_optional_user_claims(headers, secret).ok_or(AppError::Unauthorized)
}

/// The authenticated user's id, taken from the token subject.
pub fn authenticated_user_id(headers: &HeaderMap, secret: &str) -> Result<Uuid, AppError> {
    let claims = decode_required_user_claims(headers, secret)?;
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)
}
