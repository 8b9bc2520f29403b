use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::replies::dto::AddReplyRequest,
    presentation::http::{
        errors::AppError, middleware::user::authenticated_user_id, state::AppState,
    },
};

pub async fn post_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(Uuid, Uuid)>,
    headers: HeaderMap,
    Json(body): Json<AddReplyRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let owner = authenticated_user_id(&headers, &state.config.jwt_secret)?;

    if body.content.trim().is_empty() {
        return Err(AppError::BadRequest("Reply cannot be empty".to_string()));
    }
    if body.content.len() > 500 {
        return Err(AppError::BadRequest(
            "Reply must be 500 characters or less".to_string(),
        ));
    }

    let added = state
        .replies
        .add_reply(thread_id, comment_id, owner, body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedReply": added }
        })),
    ))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(Uuid, Uuid, Uuid)>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = authenticated_user_id(&headers, &state.config.jwt_secret)?;

    state
        .replies
        .delete_reply(thread_id, comment_id, reply_id, user)
        .await?;

    Ok(Json(json!({ "status": "success" })))
}
