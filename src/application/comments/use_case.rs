use super::dto::{AddCommentRequest, AddedComment};
use crate::domain::{
    comment::{entity::NewComment, repository::CommentRepository},
    errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl CommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn add_comment(
        &self,
        thread_id: Uuid,
        owner: Uuid,
        request: AddCommentRequest,
    ) -> Result<AddedComment, DomainError> {
        self.thread_repository.verify_thread(thread_id).await?;

        let comment = self
            .comment_repository
            .create(NewComment {
                thread_id,
                owner,
                content: request.content,
            })
            .await?;

        Ok(AddedComment {
            id: comment.id,
            content: comment.content,
            owner: comment.owner,
        })
    }

    /// Soft-deletes a comment: the row is retained, only the flag flips.
    /// Only the comment's owner may delete it.
    pub async fn delete_comment(
        &self,
        thread_id: Uuid,
        comment_id: Uuid,
        user: Uuid,
    ) -> Result<(), DomainError> {
        self.thread_repository.verify_thread(thread_id).await?;
        self.comment_repository
            .verify_comment_thread(comment_id, thread_id)
            .await?;
        self.comment_repository.verify_owner(comment_id, user).await?;
        self.comment_repository.soft_delete(comment_id).await
    }
}
