use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::threads::dto::AddThreadRequest,
    presentation::http::{
        errors::AppError, middleware::user::authenticated_user_id, state::AppState,
    },
};

pub async fn post_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AddThreadRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let owner = authenticated_user_id(&headers, &state.config.jwt_secret)?;

    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title cannot be empty".to_string()));
    }
    if body.title.len() > 150 {
        return Err(AppError::BadRequest(
            "Title must be 150 characters or less".to_string(),
        ));
    }
    if body.body.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Thread body cannot be empty".to_string(),
        ));
    }

    let added = state.threads.add_thread(body, owner).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedThread": added }
        })),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let thread = state.threads.get_thread_detail(thread_id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": { "thread": thread }
    })))
}
