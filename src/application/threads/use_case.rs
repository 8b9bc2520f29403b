use super::dto::{AddThreadRequest, AddedThread, CommentDetail, ThreadDetail};
use crate::domain::{
    comment::repository::CommentRepository,
    errors::DomainError,
    reply::repository::ReplyRepository,
    thread::{entity::NewThread, repository::ThreadRepository},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl ThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn add_thread(
        &self,
        request: AddThreadRequest,
        owner: Uuid,
    ) -> Result<AddedThread, DomainError> {
        let thread = self
            .thread_repository
            .create(NewThread {
                title: request.title,
                body: request.body,
                owner,
            })
            .await?;

        Ok(AddedThread {
            id: thread.id,
            title: thread.title,
            owner: thread.owner,
        })
    }

    pub async fn get_thread_detail(&self, thread_id: Uuid) -> Result<ThreadDetail, DomainError> {
        let thread = self
            .thread_repository
            .find_view(thread_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Thread not found".to_string()))?;

        let comments = self
            .comment_repository
            .get_thread_comments(thread_id)
            .await?;
        let replies = self.reply_repository.get_thread_replies(thread_id).await?;

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: thread.username,
            comments: CommentDetail::assemble(comments, replies),
        })
    }
}
