//! # wedding-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! aggregation engine that turns loaded rows into dashboard statistics.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{
    AnalyticsReport, DailyRsvpCount, DailyVisitors, DeviceBreakdown, PageRank, RsvpStats,
    RsvpSummary, PAGE_VIEW_WINDOW_DAYS, RSVP_WINDOW_DAYS, TOP_PAGES_LIMIT,
};
pub use entities::{
    AdditionalGuest, Comment, CommentThread, NewComment, NewPageView, NewReply,
    NewRsvpResponse, PageView, Reply, RsvpResponse,
};
pub use error::DomainError;
pub use traits::{
    Clock, CommentRepository, ManualClock, PageViewRepository, ReplyRepository, RepoResult,
    RsvpQuery, RsvpRepository, StoreHealth, SystemClock,
};
pub use value_objects::{AttendanceFilter, DeviceClass, ParseFilterError, RsvpSortBy, SortDirection};
