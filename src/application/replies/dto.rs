use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddReplyRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AddedReply {
    pub id: Uuid,
    pub content: String,
    pub owner: Uuid,
}
