use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marker served in place of a soft-deleted reply's content.
pub const DELETED_REPLY_MARKER: &str = "**deleted reply**";

/// A reply to a comment. Structurally parallel to a comment, one level down.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reply {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub owner: Uuid,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Reply row as listed under a thread detail. Keeps `comment_id` so the
/// application layer can group replies under their parent comment.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReplyView {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub username: String,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl ReplyView {
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_REPLY_MARKER
        } else {
            &self.content
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub comment_id: Uuid,
    pub owner: Uuid,
    pub content: String,
}
