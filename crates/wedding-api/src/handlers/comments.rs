//! Guest wall handlers
//!
//! Comments and replies are public. Deleting requires the `X-Guest-Token`
//! the entry was posted with.

use axum::{extract::State, Json};
use wedding_service::{
    CommentResponse, CommentService, CommentThreadResponse, CreateCommentRequest,
    CreateReplyRequest, LikeResponse, ReplyResponse,
};

use crate::extractors::{GuestToken, IdPath, OptionalGuestToken, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// The whole wall, newest comment first
///
/// GET /comments
pub async fn list_comments(State(state): State<AppState>) -> Json<Vec<CommentThreadResponse>> {
    let service = CommentService::new(state.service_context());
    Json(service.list_with_replies().await)
}

/// Post a comment
///
/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    OptionalGuestToken(token): OptionalGuestToken,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.add_comment(request, token).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment and its replies
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    GuestToken(token): GuestToken,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id, &token).await?;
    Ok(NoContent)
}

/// Like a comment
///
/// POST /comments/{comment_id}/like
pub async fn like_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    Ok(Json(service.like_comment(comment_id).await?))
}

/// Reply to a comment
///
/// POST /comments/{comment_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    OptionalGuestToken(token): OptionalGuestToken,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.add_reply(comment_id, request, token).await?;
    Ok(Created(Json(response)))
}

/// Like a reply
///
/// POST /replies/{reply_id}/like
pub async fn like_reply(
    State(state): State<AppState>,
    IdPath(reply_id): IdPath,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    Ok(Json(service.like_reply(reply_id).await?))
}

/// Delete a reply
///
/// DELETE /replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    GuestToken(token): GuestToken,
    IdPath(reply_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_reply(reply_id, &token).await?;
    Ok(NoContent)
}
