use super::dto::ToggleCommentLikeRequest;
use crate::domain::{
    comment::repository::CommentRepository, errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;

/// Alternates a comment's like state for one user. A single entry point
/// drives both transitions: the observed state decides whether the like row
/// is inserted or deleted.
pub struct ToggleCommentLikeUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl ToggleCommentLikeUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Returns the new like state: `true` when the call liked the comment,
    /// `false` when it removed an existing like.
    ///
    /// Preconditions are checked in order and fail fast; every step before
    /// the final mutation is a pure read, so no rollback is needed.
    pub async fn execute(&self, request: ToggleCommentLikeRequest) -> Result<bool, DomainError> {
        self.thread_repository
            .verify_thread(request.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_thread(request.comment_id, request.thread_id)
            .await?;

        let liked = self
            .comment_repository
            .has_liked(request.comment_id, request.owner)
            .await?;

        if liked {
            self.comment_repository
                .remove_like(request.comment_id, request.owner)
                .await?;
        } else {
            self.comment_repository
                .add_like(request.comment_id, request.owner)
                .await?;
        }

        Ok(!liked)
    }
}
