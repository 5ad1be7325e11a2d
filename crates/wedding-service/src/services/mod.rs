//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of store operations.

pub mod analytics;
pub mod auth;
pub mod comment;
pub mod context;
pub mod csv;
pub mod error;
pub mod rate_limit;
pub mod retry;
pub mod rsvp;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use analytics::AnalyticsService;
pub use auth::DashboardAuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use rate_limit::RateLimiter;
pub use retry::{with_retry, with_retry_if, RetryPolicy};
pub use rsvp::RsvpService;
