//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wedding_core::entities::{NewReply, Reply};
use wedding_core::traits::{RepoResult, ReplyRepository};

use crate::models::ReplyModel;

use super::error::{comment_not_found, map_db_error, map_foreign_key_violation, reply_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, reply), fields(comment_id = %reply.comment_id))]
    async fn insert(&self, reply: &NewReply) -> RepoResult<Reply> {
        let model = sqlx::query_as::<_, ReplyModel>(
            r#"
            INSERT INTO comment_replies (id, comment_id, name, message, likes, user_id)
            VALUES ($1, $2, $3, $4, 0, $5)
            RETURNING id, comment_id, name, message, likes, user_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reply.comment_id)
        .bind(&reply.name)
        .bind(&reply.message)
        .bind(&reply.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || comment_not_found(reply.comment_id)))?;

        Ok(Reply::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, comment_id, name, message, likes, user_id, created_at
            FROM comment_replies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self, comment_ids), fields(count = comment_ids.len()))]
    async fn find_by_comments(&self, comment_ids: &[Uuid]) -> RepoResult<Vec<Reply>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, comment_id, name, message, likes, user_id, created_at
            FROM comment_replies
            WHERE comment_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32> {
        let likes: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE comment_replies
            SET likes = likes + 1
            WHERE id = $1
            RETURNING likes
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        likes.ok_or_else(|| reply_not_found(id))
    }

    #[instrument(skip(self, user_id))]
    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM comment_replies
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM comment_replies WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        if exists {
            Ok(false)
        } else {
            Err(reply_not_found(id))
        }
    }
}
