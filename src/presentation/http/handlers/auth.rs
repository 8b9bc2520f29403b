use axum::{Json, extract::State, http::StatusCode};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Deserialize;
use serde_json::json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::presentation::http::{
    errors::AppError, middleware::user::UserClaims, state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
}

fn issue_access_token(state: &AppState, user_id: Uuid, username: &str) -> Result<String, AppError> {
    let exp = (Utc::now() + chrono::Duration::hours(state.config.access_token_age_hours))
        .timestamp() as usize;
    let claims = UserClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let username = body.username.trim().to_string();
    if username.is_empty() || username.len() > 50 {
        return Err(AppError::BadRequest(
            "Username must be between 1 and 50 characters".to_string(),
        ));
    }
    if username.contains(char::is_whitespace) {
        return Err(AppError::BadRequest(
            "Username must not contain whitespace".to_string(),
        ));
    }
    if body.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    let fullname = body.fullname.trim().to_string();
    if fullname.is_empty() {
        return Err(AppError::BadRequest("Fullname is required".to_string()));
    }

    let password_hash = hash(&body.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    let id = Uuid::now_v7();
    let insert_result = sqlx::query(
        "INSERT INTO users (id, username, password_hash, fullname) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(&username)
    .bind(&password_hash)
    .bind(&fullname)
    .execute(&state.db)
    .await;

    if let Err(e) = insert_result {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some("23505") {
                return Err(AppError::BadRequest("Username already taken".to_string()));
            }
        }
        return Err(e.into());
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": {
                "addedUser": {
                    "id": id,
                    "username": username,
                    "fullname": fullname,
                }
            }
        })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let username = body.username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::Forbidden("Invalid credentials".to_string()))?;

    let valid = verify(&body.password, &row.password_hash)
        .map_err(|_| AppError::Internal("Password verification failed".to_string()))?;

    if !valid {
        return Err(AppError::Forbidden("Invalid credentials".to_string()));
    }

    let token = issue_access_token(&state, row.id, &row.username)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "accessToken": token }
        })),
    ))
}
