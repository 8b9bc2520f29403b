use super::entity::{NewThread, Thread, ThreadView};
use crate::domain::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn create(&self, thread: NewThread) -> Result<Thread, DomainError>;

    /// Confirms the thread exists, failing with NotFound otherwise.
    async fn verify_thread(&self, thread_id: Uuid) -> Result<(), DomainError>;

    async fn find_view(&self, thread_id: Uuid) -> Result<Option<ThreadView>, DomainError>;
}
