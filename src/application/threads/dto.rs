use crate::domain::{comment::entity::CommentView, reply::entity::ReplyView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddThreadRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct AddedThread {
    pub id: Uuid,
    pub title: String,
    pub owner: Uuid,
}

/// Full thread as served by the detail endpoint: the thread head plus its
/// comments, each carrying a live like count and its replies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetail {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: Uuid,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDetail {
    pub id: Uuid,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl CommentDetail {
    /// Groups each reply under its parent comment, masking soft-deleted
    /// content on both levels. Comments and replies arrive pre-sorted by
    /// creation time and keep that order.
    pub fn assemble(comments: Vec<CommentView>, replies: Vec<ReplyView>) -> Vec<CommentDetail> {
        comments
            .into_iter()
            .map(|comment| {
                let replies = replies
                    .iter()
                    .filter(|reply| reply.comment_id == comment.id)
                    .map(|reply| ReplyDetail {
                        id: reply.id,
                        username: reply.username.clone(),
                        date: reply.created_at,
                        content: reply.display_content().to_string(),
                    })
                    .collect();
                CommentDetail {
                    id: comment.id,
                    username: comment.username.clone(),
                    date: comment.created_at,
                    content: comment.display_content().to_string(),
                    like_count: comment.like_count,
                    replies,
                }
            })
            .collect()
    }
}
