//! Guest wall service
//!
//! Comments, replies, likes and owner-only deletion.

use std::collections::HashMap;

use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use wedding_core::entities::{CommentThread, Reply};
use wedding_core::DomainError;

use crate::dto::mappers::{new_comment, new_reply};
use crate::dto::{
    CommentResponse, CommentThreadResponse, CreateCommentRequest, CreateReplyRequest,
    LikeResponse, ReplyResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::retry::with_retry_if;

/// Guest wall service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every comment, newest first, each with its replies oldest first.
    ///
    /// Returns an empty wall when the store is unreachable.
    #[instrument(skip(self))]
    pub async fn list_with_replies(&self) -> Vec<CommentThreadResponse> {
        match self.load_threads().await {
            Ok(threads) => threads.into_iter().map(Into::into).collect(),
            Err(e) => {
                warn!(error = %e, "Failed to load guest wall");
                Vec::new()
            }
        }
    }

    /// Post a comment, owned by `user_id` when a guest token was sent
    #[instrument(skip(self, request, user_id))]
    pub async fn add_comment(
        &self,
        request: CreateCommentRequest,
        user_id: Option<String>,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        let comment = new_comment(request, user_id).validate()?;

        let stored = with_retry_if(
            self.ctx.retry_policy(),
            || self.ctx.comment_repo().insert(&comment),
            DomainError::is_retryable,
        )
        .await?;

        info!(comment_id = %stored.id, "Comment posted");

        Ok(stored.into())
    }

    /// Reply to an existing comment
    #[instrument(skip(self, request, user_id), fields(comment_id = %comment_id))]
    pub async fn add_reply(
        &self,
        comment_id: Uuid,
        request: CreateReplyRequest,
        user_id: Option<String>,
    ) -> ServiceResult<ReplyResponse> {
        request.validate()?;
        let reply = new_reply(comment_id, request, user_id).validate()?;

        let stored = with_retry_if(
            self.ctx.retry_policy(),
            || self.ctx.reply_repo().insert(&reply),
            DomainError::is_retryable,
        )
        .await?;

        info!(reply_id = %stored.id, "Reply posted");

        Ok(stored.into())
    }

    /// Add one like to a comment
    #[instrument(skip(self))]
    pub async fn like_comment(&self, comment_id: Uuid) -> ServiceResult<LikeResponse> {
        let likes = self.ctx.comment_repo().increment_likes(comment_id).await?;

        Ok(LikeResponse {
            id: comment_id,
            likes,
        })
    }

    /// Add one like to a reply
    #[instrument(skip(self))]
    pub async fn like_reply(&self, reply_id: Uuid) -> ServiceResult<LikeResponse> {
        let likes = self.ctx.reply_repo().increment_likes(reply_id).await?;

        Ok(LikeResponse {
            id: reply_id,
            likes,
        })
    }

    /// Delete a comment and its replies; only its author may do this
    #[instrument(skip(self, guest_token))]
    pub async fn delete_comment(&self, comment_id: Uuid, guest_token: &str) -> ServiceResult<()> {
        if !self
            .ctx
            .comment_repo()
            .delete_owned(comment_id, guest_token)
            .await?
        {
            return Err(DomainError::NotCommentAuthor.into());
        }

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    /// Delete a reply; only its author may do this
    #[instrument(skip(self, guest_token))]
    pub async fn delete_reply(&self, reply_id: Uuid, guest_token: &str) -> ServiceResult<()> {
        if !self
            .ctx
            .reply_repo()
            .delete_owned(reply_id, guest_token)
            .await?
        {
            return Err(DomainError::NotReplyAuthor.into());
        }

        info!(reply_id = %reply_id, "Reply deleted");

        Ok(())
    }

    async fn load_threads(&self) -> Result<Vec<CommentThread>, DomainError> {
        let comments = self.ctx.comment_repo().find_all().await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let mut replies_by_comment: HashMap<Uuid, Vec<Reply>> = HashMap::new();
        for reply in self.ctx.reply_repo().find_by_comments(&ids).await? {
            replies_by_comment
                .entry(reply.comment_id)
                .or_default()
                .push(reply);
        }

        Ok(comments
            .into_iter()
            .map(|comment| CommentThread {
                replies: replies_by_comment.remove(&comment.id).unwrap_or_default(),
                comment,
            })
            .collect())
    }
}
