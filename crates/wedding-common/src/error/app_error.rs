//! Application error types
//!
//! Every error that reaches a client is an `AppError`, or converts into one,
//! and carries a stable machine-readable code next to its HTTP status.

use wedding_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid dashboard password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Dashboard session expired, log in again")]
    TokenExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Too many submissions, try again in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::RateLimited { .. } => 429,
            Self::StoreUnavailable(_) => 503,
            Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status_code(e),
        }
    }

    /// Machine-readable code for the error body
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => domain_error_code(e),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// HTTP status for a domain rule violation
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_authorization() {
        403
    } else if err.is_validation() {
        400
    } else if err.is_store() {
        503
    } else {
        500
    }
}

/// Error code for a domain rule violation; all input problems share one code
#[must_use]
pub fn domain_error_code(err: &DomainError) -> &'static str {
    if err.is_validation() {
        "VALIDATION_ERROR"
    } else {
        err.code()
    }
}
