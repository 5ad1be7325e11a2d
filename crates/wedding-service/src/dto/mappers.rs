//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to the domain's unvalidated input types.

use wedding_common::auth::SessionToken;
use wedding_core::entities::{
    AdditionalGuest, Comment, CommentThread, NewComment, NewPageView, NewReply, NewRsvpResponse,
    Reply, RsvpResponse,
};
use uuid::Uuid;

use super::requests::{
    CreateCommentRequest, CreateReplyRequest, RecordPageViewRequest, SubmitRsvpRequest,
};
use super::responses::{
    CommentResponse, CommentThreadResponse, DashboardTokenResponse, ReplyResponse,
    RsvpEntryResponse,
};

// ============================================================================
// RSVP Mappers
// ============================================================================

impl From<SubmitRsvpRequest> for NewRsvpResponse {
    fn from(request: SubmitRsvpRequest) -> Self {
        Self {
            guest_name: request.guest_name,
            email: request.email,
            phone: request.phone,
            is_attending: request.is_attending,
            number_of_guests: request.number_of_guests,
            additional_guests: request
                .additional_guests
                .into_iter()
                .map(|g| AdditionalGuest::new(g.name))
                .collect(),
            wants_aso_ebi: request.wants_aso_ebi,
            notes: request.notes,
        }
    }
}

impl From<RsvpResponse> for RsvpEntryResponse {
    fn from(rsvp: RsvpResponse) -> Self {
        Self {
            id: rsvp.id,
            guest_name: rsvp.guest_name,
            email: rsvp.email,
            phone: rsvp.phone,
            is_attending: rsvp.is_attending,
            number_of_guests: rsvp.number_of_guests,
            additional_guests_data: rsvp.additional_guests,
            wants_aso_ebi: rsvp.wants_aso_ebi,
            notes: rsvp.notes,
            created_at: rsvp.created_at,
        }
    }
}

// ============================================================================
// Guest Wall Mappers
// ============================================================================

/// Comment body plus the optional guest token of the author
pub(crate) fn new_comment(request: CreateCommentRequest, user_id: Option<String>) -> NewComment {
    NewComment::new(request.name, request.message).with_owner(user_id)
}

/// Reply body plus the optional guest token of the author
pub(crate) fn new_reply(
    comment_id: Uuid,
    request: CreateReplyRequest,
    user_id: Option<String>,
) -> NewReply {
    NewReply::new(comment_id, request.name, request.message).with_owner(user_id)
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            message: comment.message,
            likes: comment.likes,
            user_id: comment.user_id,
            created_at: comment.created_at,
        }
    }
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            comment_id: reply.comment_id,
            name: reply.name,
            message: reply.message,
            likes: reply.likes,
            user_id: reply.user_id,
            created_at: reply.created_at,
        }
    }
}

impl From<CommentThread> for CommentThreadResponse {
    fn from(thread: CommentThread) -> Self {
        Self {
            comment: thread.comment.into(),
            replies: thread.replies.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Analytics Mappers
// ============================================================================

impl From<RecordPageViewRequest> for NewPageView {
    fn from(request: RecordPageViewRequest) -> Self {
        Self {
            page: request.page,
            user_session_id: request.session_id,
            referrer: request.referrer,
            browser: request.browser,
            device: request.device,
        }
    }
}

// ============================================================================
// Dashboard Mappers
// ============================================================================

impl From<SessionToken> for DashboardTokenResponse {
    fn from(token: SessionToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}
