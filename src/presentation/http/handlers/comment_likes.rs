use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::comment_likes::dto::ToggleCommentLikeRequest,
    presentation::http::{
        errors::AppError, middleware::user::authenticated_user_id, state::AppState,
    },
};

/// One endpoint drives both transitions: liking an unliked comment and
/// unliking a liked one. The response does not distinguish the two.
pub async fn put_comment_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(Uuid, Uuid)>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let owner = authenticated_user_id(&headers, &state.config.jwt_secret)?;

    let liked = state
        .toggle_comment_like
        .execute(ToggleCommentLikeRequest {
            thread_id,
            comment_id,
            owner,
        })
        .await?;

    tracing::debug!(%comment_id, %owner, liked, "comment like toggled");

    Ok(Json(json!({ "status": "success" })))
}
