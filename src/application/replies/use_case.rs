use super::dto::{AddReplyRequest, AddedReply};
use crate::domain::{
    comment::repository::CommentRepository,
    errors::DomainError,
    reply::{entity::NewReply, repository::ReplyRepository},
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl ReplyUseCase {
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

    pub async fn add_reply(
        &self,
        thread_id: Uuid,
        comment_id: Uuid,
        owner: Uuid,
        request: AddReplyRequest,
    ) -> Result<AddedReply, DomainError> {
        self.thread_repository.verify_thread(thread_id).await?;
        self.comment_repository
            .verify_comment_thread(comment_id, thread_id)
            .await?;

        let reply = self
            .reply_repository
            .create(NewReply {
                comment_id,
                owner,
                content: request.content,
            })
            .await?;

        Ok(AddedReply {
            id: reply.id,
            content: reply.content,
            owner: reply.owner,
        })
    }

    pub async fn delete_reply(
        &self,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        user: Uuid,
    ) -> Result<(), DomainError> {
        self.thread_repository.verify_thread(thread_id).await?;
        self.comment_repository
            .verify_comment_thread(comment_id, thread_id)
            .await?;
        self.reply_repository
            .verify_reply_comment(reply_id, comment_id)
            .await?;
        self.reply_repository.verify_owner(reply_id, user).await?;
        self.reply_repository.soft_delete(reply_id).await
    }
}
