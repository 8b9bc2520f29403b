use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marker served in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_MARKER: &str = "**deleted comment**";

/// A reply to a thread. Soft-deleted rows are retained with `is_deleted`
/// set; their content is masked on the read path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub owner: Uuid,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment row as listed under a thread: author username joined in and the
/// like count aggregated over live `comment_likes` rows at read time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentView {
    pub id: Uuid,
    pub username: String,
    pub content: String,
    pub is_deleted: bool,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    /// Content as rendered to clients. Soft-deleted comments keep their row
    /// but never expose the original text.
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_COMMENT_MARKER
        } else {
            &self.content
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub thread_id: Uuid,
    pub owner: Uuid,
    pub content: String,
}
