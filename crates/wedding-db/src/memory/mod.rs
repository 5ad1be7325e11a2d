//! In-process row store
//!
//! Implements every repository trait over `parking_lot` locked vectors. Used
//! by tests and when `DATABASE_URL=memory://`. Rows are lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

use wedding_core::entities::{
    Comment, NewComment, NewPageView, NewReply, NewRsvpResponse, PageView, Reply, RsvpResponse,
};
use wedding_core::error::DomainError;
use wedding_core::traits::{
    Clock, CommentRepository, PageViewRepository, RepoResult, ReplyRepository, RsvpQuery,
    RsvpRepository, StoreHealth, SystemClock,
};
use wedding_core::value_objects::{RsvpSortBy, SortDirection};

#[derive(Default)]
struct Tables {
    rsvps: Vec<RsvpResponse>,
    comments: Vec<Comment>,
    replies: Vec<Reply>,
    page_views: Vec<PageView>,
}

/// Shared in-memory store; clones see the same rows
#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Create an empty store stamping rows with the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store stamping rows with `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("MemoryStore")
            .field("rsvps", &tables.rsvps.len())
            .field("comments", &tables.comments.len())
            .field("replies", &tables.replies.len())
            .field("page_views", &tables.page_views.len())
            .finish_non_exhaustive()
    }
}

fn compare_rsvps(a: &RsvpResponse, b: &RsvpResponse, sort_by: RsvpSortBy) -> Ordering {
    match sort_by {
        RsvpSortBy::Date => a.created_at.cmp(&b.created_at),
        RsvpSortBy::Name => a.guest_name.to_lowercase().cmp(&b.guest_name.to_lowercase()),
        RsvpSortBy::Guests => a.number_of_guests.cmp(&b.number_of_guests),
    }
}

fn in_range(at: DateTime<Utc>, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> bool {
    start.map_or(true, |s| at >= s) && end.map_or(true, |e| at <= e)
}

// ============================================================================
// RSVP
// ============================================================================

#[async_trait]
impl RsvpRepository for MemoryStore {
    async fn insert(&self, rsvp: &NewRsvpResponse) -> RepoResult<RsvpResponse> {
        let stored = rsvp.clone().into_response(Uuid::new_v4(), self.now());
        self.tables.write().rsvps.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self, query: &RsvpQuery) -> RepoResult<Vec<RsvpResponse>> {
        let mut rows: Vec<RsvpResponse> = self
            .tables
            .read()
            .rsvps
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let primary = compare_rsvps(a, b, query.sort_by);
            let primary = match query.direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        if let Some(limit) = query.limit {
            rows.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        }

        Ok(rows)
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut tables = self.tables.write();
        let deleted = tables.rsvps.len() as u64;
        tables.rsvps.clear();
        Ok(deleted)
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: &NewComment) -> RepoResult<Comment> {
        let stored = comment.clone().into_comment(Uuid::new_v4(), self.now());
        self.tables.write().comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        Ok(self.tables.read().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Comment>> {
        let mut rows = self.tables.read().comments.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32> {
        let mut tables = self.tables.write();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CommentNotFound(id))?;
        comment.likes += 1;
        Ok(comment.likes)
    }

    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        let comment = tables
            .comments
            .iter()
            .find(|c| c.id == id)
            .ok_or(DomainError::CommentNotFound(id))?;

        if !comment.is_owned_by(user_id) {
            return Ok(false);
        }

        tables.comments.retain(|c| c.id != id);
        tables.replies.retain(|r| r.comment_id != id);
        Ok(true)
    }
}

// ============================================================================
// Replies
// ============================================================================

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn insert(&self, reply: &NewReply) -> RepoResult<Reply> {
        let mut tables = self.tables.write();
        if !tables.comments.iter().any(|c| c.id == reply.comment_id) {
            return Err(DomainError::CommentNotFound(reply.comment_id));
        }
        let stored = reply.clone().into_reply(Uuid::new_v4(), self.now());
        tables.replies.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        Ok(self.tables.read().replies.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_comments(&self, comment_ids: &[Uuid]) -> RepoResult<Vec<Reply>> {
        let mut rows: Vec<Reply> = self
            .tables
            .read()
            .replies
            .iter()
            .filter(|r| comment_ids.contains(&r.comment_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32> {
        let mut tables = self.tables.write();
        let reply = tables
            .replies
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReplyNotFound(id))?;
        reply.likes += 1;
        Ok(reply.likes)
    }

    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        let reply = tables
            .replies
            .iter()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReplyNotFound(id))?;

        if !reply.is_owned_by(user_id) {
            return Ok(false);
        }

        tables.replies.retain(|r| r.id != id);
        Ok(true)
    }
}

// ============================================================================
// Page views
// ============================================================================

#[async_trait]
impl PageViewRepository for MemoryStore {
    async fn insert(&self, view: &NewPageView) -> RepoResult<PageView> {
        let stored = view.clone().into_page_view(Uuid::new_v4(), self.now());
        self.tables.write().page_views.push(stored.clone());
        Ok(stored)
    }

    async fn find_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<PageView>> {
        Ok(self
            .tables
            .read()
            .page_views
            .iter()
            .filter(|v| in_range(v.created_at, start, end))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
