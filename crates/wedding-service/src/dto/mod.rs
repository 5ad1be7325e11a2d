//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting between DTOs and domain types

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AdditionalGuestRequest, AnalyticsQuery, ClearRsvpQuery, CreateCommentRequest,
    CreateReplyRequest, DashboardLoginRequest, RecentRsvpQuery, RecordPageViewRequest,
    RsvpListQuery, SubmitRsvpRequest,
};

// Re-export commonly used response types
pub use responses::{
    ClearRsvpResponse, CommentResponse, CommentThreadResponse, DashboardTokenResponse,
    HealthChecks, HealthResponse, LikeResponse, PageViewRecordedResponse, ReadinessResponse,
    ReplyResponse, RsvpEntryResponse, SubmitRsvpResponse,
};
