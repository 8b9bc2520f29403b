use super::entity::{Comment, CommentView, NewComment};
use crate::domain::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;

    async fn soft_delete(&self, comment_id: Uuid) -> Result<(), DomainError>;

    /// Fails with Forbidden unless `user` owns the comment.
    async fn verify_owner(&self, comment_id: Uuid, user: Uuid) -> Result<(), DomainError>;

    /// Confirms the comment exists and belongs to the thread, failing with
    /// NotFound otherwise.
    async fn verify_comment_thread(
        &self,
        comment_id: Uuid,
        thread_id: Uuid,
    ) -> Result<(), DomainError>;

    /// All comments of a thread in creation order, each annotated with its
    /// like count computed over live like rows.
    async fn get_thread_comments(&self, thread_id: Uuid)
    -> Result<Vec<CommentView>, DomainError>;

    async fn has_liked(&self, comment_id: Uuid, owner: Uuid) -> Result<bool, DomainError>;

    /// Inserts a like row. A concurrent toggle that already inserted the
    /// same (comment, owner) pair makes this a no-op rather than an error.
    async fn add_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError>;

    /// Deletes the like row. Succeeds even when no row matched.
    async fn remove_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError>;
}
