use crate::domain::{
    comment::{
        entity::{Comment, CommentView, NewComment},
        repository::CommentRepository,
    },
    errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxCommentRepository {
    pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (id, thread_id, owner, content) VALUES ($1, $2, $3, $4) \
             RETURNING id, thread_id, owner, content, is_deleted, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(comment.thread_id)
        .bind(comment.owner)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(row)
    }

    async fn soft_delete(&self, comment_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }

    async fn verify_owner(&self, comment_id: Uuid, user: Uuid) -> Result<(), DomainError> {
        let owns = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND owner = $2)"#,
        )
        .bind(comment_id)
        .bind(user)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        if !owns {
            return Err(DomainError::Forbidden(
                "You are not the owner of this comment".to_string(),
            ));
        }
        Ok(())
    }

    async fn verify_comment_thread(
        &self,
        comment_id: Uuid,
        thread_id: Uuid,
    ) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2)"#,
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        if !exists {
            return Err(DomainError::NotFound(
                "Comment not found in this thread!".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_thread_comments(
        &self,
        thread_id: Uuid,
    ) -> Result<Vec<CommentView>, DomainError> {
        // Like counts are aggregated over live rows at read time; a stored
        // counter could drift under concurrent toggles.
        let rows = sqlx::query_as::<_, CommentView>(
            "SELECT c.id, u.username, c.content, c.is_deleted, \
                    (SELECT COUNT(*) FROM comment_likes WHERE comment_id = c.id) AS like_count, \
                    c.created_at \
             FROM comments c \
             JOIN users u ON u.id = c.owner \
             WHERE c.thread_id = $1 \
             ORDER BY c.created_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(rows)
    }

    async fn has_liked(&self, comment_id: Uuid, owner: Uuid) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND owner = $2)"#,
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(exists)
    }

    async fn add_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError> {
        // Two concurrent toggles can both observe "not liked" and race to
        // insert; the unique constraint plus DO NOTHING makes the loser a
        // no-op instead of an error.
        sqlx::query(
            "INSERT INTO comment_likes (id, comment_id, owner) VALUES ($1, $2, $3) \
             ON CONFLICT (comment_id, owner) DO NOTHING",
        )
        .bind(Uuid::now_v7())
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;
        Ok(())
    }

    async fn remove_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError> {
        // Zero rows affected is fine: the like was already gone.
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }
}
