use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AddedComment {
    pub id: Uuid,
    pub content: String,
    pub owner: Uuid,
}
