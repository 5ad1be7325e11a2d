//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Number of guests must be between {min} and {max}")]
    GuestCountOutOfRange { min: i32, max: i32 },

    #[error("At most {max} additional guests may be listed")]
    TooManyAdditionalGuests { max: usize },

    #[error("{field} too long: max {max} characters")]
    ContentTooLong { field: &'static str, max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author may delete this comment")]
    NotCommentAuthor,

    #[error("Only the author may delete this reply")]
    NotReplyAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::GuestCountOutOfRange { .. } => "GUEST_COUNT_OUT_OF_RANGE",
            Self::TooManyAdditionalGuests { .. } => "TOO_MANY_ADDITIONAL_GUESTS",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotReplyAuthor => "NOT_REPLY_AUTHOR",

            // Infrastructure
            Self::StoreError(_) => "STORE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommentNotFound(_) | Self::ReplyNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::GuestCountOutOfRange { .. }
                | Self::TooManyAdditionalGuests { .. }
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentAuthor | Self::NotReplyAuthor)
    }

    /// Check if this error came from the store being unreachable or failing
    pub fn is_store(&self) -> bool {
        matches!(self, Self::StoreError(_))
    }

    /// Whether repeating the same call could succeed.
    ///
    /// Anything the caller caused (bad input, missing rows, foreign rows) is
    /// final; everything else is treated as transient.
    pub fn is_retryable(&self) -> bool {
        !(self.is_not_found() || self.is_validation() || self.is_authorization())
    }
}
