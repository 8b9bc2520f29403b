use uuid::Uuid;

/// Identifiers driving one like toggle: the thread and comment from the
/// request path, the owner from the authenticated token.
#[derive(Debug, Clone, Copy)]
pub struct ToggleCommentLikeRequest {
    pub thread_id: Uuid,
    pub comment_id: Uuid,
    pub owner: Uuid,
}
