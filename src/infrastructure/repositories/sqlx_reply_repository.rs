use crate::domain::{
    errors::DomainError,
    reply::{
        entity::{NewReply, Reply, ReplyView},
        repository::ReplyRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxReplyRepository {
    pool: PgPool,
}

impl SqlxReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for SqlxReplyRepository {
    async fn create(&self, reply: NewReply) -> Result<Reply, DomainError> {
        let row = sqlx::query_as::<_, Reply>(
            "INSERT INTO replies (id, comment_id, owner, content) VALUES ($1, $2, $3, $4) \
             RETURNING id, comment_id, owner, content, is_deleted, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(reply.comment_id)
        .bind(reply.owner)
        .bind(&reply.content)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(row)
    }

    async fn soft_delete(&self, reply_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }

    async fn verify_owner(&self, reply_id: Uuid, user: Uuid) -> Result<(), DomainError> {
        let owns = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1 AND owner = $2)"#,
        )
        .bind(reply_id)
        .bind(user)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        if !owns {
            return Err(DomainError::Forbidden(
                "You are not the owner of this reply".to_string(),
            ));
        }
        Ok(())
    }

    async fn verify_reply_comment(
        &self,
        reply_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1 AND comment_id = $2)"#,
        )
        .bind(reply_id)
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        if !exists {
            return Err(DomainError::NotFound(
                "Reply not found in this comment".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_thread_replies(&self, thread_id: Uuid) -> Result<Vec<ReplyView>, DomainError> {
        let rows = sqlx::query_as::<_, ReplyView>(
            "SELECT r.id, r.comment_id, u.username, r.content, r.is_deleted, r.created_at \
             FROM replies r \
             JOIN comments c ON c.id = r.comment_id \
             JOIN users u ON u.id = r.owner \
             WHERE c.thread_id = $1 \
             ORDER BY r.created_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(rows)
    }
}
