use super::entity::{NewReply, Reply, ReplyView};
use crate::domain::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn create(&self, reply: NewReply) -> Result<Reply, DomainError>;

    async fn soft_delete(&self, reply_id: Uuid) -> Result<(), DomainError>;

    /// Fails with Forbidden unless `user` owns the reply.
    async fn verify_owner(&self, reply_id: Uuid, user: Uuid) -> Result<(), DomainError>;

    /// Confirms the reply exists and belongs to the comment, failing with
    /// NotFound otherwise.
    async fn verify_reply_comment(
        &self,
        reply_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DomainError>;

    /// All replies under any comment of the thread, in creation order.
    async fn get_thread_replies(&self, thread_id: Uuid) -> Result<Vec<ReplyView>, DomainError>;
}
