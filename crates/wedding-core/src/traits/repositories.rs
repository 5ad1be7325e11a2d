//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the row store, and the
//! infrastructure layer provides the implementation (PostgreSQL or the
//! in-process store).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Comment, NewComment, NewPageView, NewReply, NewRsvpResponse, PageView, Reply, RsvpResponse,
};
use crate::error::DomainError;
use crate::value_objects::{AttendanceFilter, RsvpSortBy, SortDirection};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// RSVP Repository
// ============================================================================

/// Selection and ordering for RSVP listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpQuery {
    pub attendance: AttendanceFilter,
    /// Inclusive lower bound on `created_at`
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`
    pub end: Option<DateTime<Utc>>,
    pub sort_by: RsvpSortBy,
    pub direction: SortDirection,
    pub limit: Option<i64>,
}

impl RsvpQuery {
    /// Newest `limit` responses
    pub fn recent(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Whether a response falls inside the attendance and date bounds
    pub fn matches(&self, rsvp: &RsvpResponse) -> bool {
        self.attendance.matches(rsvp.is_attending)
            && self.start.map_or(true, |start| rsvp.created_at >= start)
            && self.end.map_or(true, |end| rsvp.created_at <= end)
    }
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Insert a response; the store assigns `id` and `created_at`
    async fn insert(&self, rsvp: &NewRsvpResponse) -> RepoResult<RsvpResponse>;

    /// List responses matching the query, ties broken by id ascending
    async fn find_all(&self, query: &RsvpQuery) -> RepoResult<Vec<RsvpResponse>>;

    /// Delete every response, returning how many were removed
    async fn delete_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment with zero likes
    async fn insert(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// All comments, newest first
    async fn find_all(&self) -> RepoResult<Vec<Comment>>;

    /// Atomically add one like, returning the new count.
    /// Returns `CommentNotFound` if absent.
    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32>;

    /// Delete a comment (and its replies) if `user_id` owns it.
    /// Returns false when the comment exists but belongs to someone else.
    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Insert a reply with zero likes
    async fn insert(&self, reply: &NewReply) -> RepoResult<Reply>;

    /// Find reply by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>>;

    /// Replies of the given comments, oldest first
    async fn find_by_comments(&self, comment_ids: &[Uuid]) -> RepoResult<Vec<Reply>>;

    /// Atomically add one like, returning the new count.
    /// Returns `ReplyNotFound` if absent.
    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32>;

    /// Delete a reply if `user_id` owns it.
    /// Returns false when the reply exists but belongs to someone else.
    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool>;
}

// ============================================================================
// Page View Repository
// ============================================================================

#[async_trait]
pub trait PageViewRepository: Send + Sync {
    /// Record a page view
    async fn insert(&self, view: &NewPageView) -> RepoResult<PageView>;

    /// Views with `created_at` inside the inclusive bounds
    async fn find_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<PageView>>;
}

// ============================================================================
// Store Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Check that the store can serve requests
    async fn ping(&self) -> RepoResult<()>;
}
