//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use uuid::Uuid;
use wedding_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreError(e.to_string())
}

/// Check for a foreign key violation and return the appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    DomainError::StoreError(e.to_string())
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Uuid) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "reply not found" error
pub fn reply_not_found(id: Uuid) -> DomainError {
    DomainError::ReplyNotFound(id)
}
