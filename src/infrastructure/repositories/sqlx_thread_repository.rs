use crate::domain::{
    errors::DomainError,
    thread::{
        entity::{NewThread, Thread, ThreadView},
        repository::ThreadRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxThreadRepository {
    pool: PgPool,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn create(&self, thread: NewThread) -> Result<Thread, DomainError> {
        let row = sqlx::query_as::<_, Thread>(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, body, owner, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(row)
    }

    async fn verify_thread(&self, thread_id: Uuid) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)"#,
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        if !exists {
            return Err(DomainError::NotFound("Thread not found".to_string()));
        }
        Ok(())
    }

    async fn find_view(&self, thread_id: Uuid) -> Result<Option<ThreadView>, DomainError> {
        let row = sqlx::query_as::<_, ThreadView>(
            "SELECT t.id, t.title, t.body, u.username, t.created_at \
             FROM threads t \
             JOIN users u ON u.id = t.owner \
             WHERE t.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(row)
    }
}
