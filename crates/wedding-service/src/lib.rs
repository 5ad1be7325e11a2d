//! # wedding-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a shared [`ServiceContext`] and are cheap to construct per
//! request:
//!
//! ```ignore
//! let id = RsvpService::new(&ctx).submit(request).await?;
//! ```

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AnalyticsService, CommentService, DashboardAuthService, RateLimiter, RetryPolicy,
    RsvpService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
