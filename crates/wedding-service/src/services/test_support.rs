//! Shared fixtures for service tests

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use wedding_common::auth::JwtService;
use wedding_core::entities::{
    Comment, NewComment, NewPageView, NewReply, NewRsvpResponse, PageView, Reply, RsvpResponse,
};
use wedding_core::traits::{
    CommentRepository, ManualClock, PageViewRepository, RepoResult, ReplyRepository, RsvpQuery,
    RsvpRepository,
};
use wedding_core::DomainError;
use wedding_db::MemoryStore;

use super::context::ServiceContext;
use super::retry::RetryPolicy;

pub const TEST_SECRET: &str = "service-test-secret";

/// Argon2 hash of `"letmein"`
pub fn password_hash() -> String {
    wedding_common::auth::hash_password("letmein").unwrap()
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, 12, 0, 0).unwrap()
}

/// Context over a fresh in-memory store, with a manual clock shared by the
/// store and the submission gate
pub fn context() -> (ServiceContext, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start()));
    let ctx = ServiceContext::builder()
        .memory_store(MemoryStore::with_clock(clock.clone()))
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .dashboard_password_hash(password_hash())
        .retry_policy(RetryPolicy::immediate(3))
        .clock(clock.clone())
        .build()
        .unwrap();
    (ctx, clock)
}

/// Context whose repositories go through `store`
pub fn flaky_context(store: &FlakyStore) -> (ServiceContext, Arc<ManualClock>) {
    let shared = Arc::new(store.clone());
    let ctx = ServiceContext::builder()
        .rsvp_repo(shared.clone())
        .comment_repo(shared.clone())
        .reply_repo(shared.clone())
        .page_view_repo(shared)
        .store_health(Arc::new(store.inner.clone()))
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .dashboard_password_hash(password_hash())
        .retry_policy(RetryPolicy::immediate(3))
        .clock(store.clock.clone())
        .build()
        .unwrap();
    (ctx, store.clock.clone())
}

/// In-memory store that fails on demand
#[derive(Clone)]
pub struct FlakyStore {
    inner: MemoryStore,
    clock: Arc<ManualClock>,
    pending_write_failures: Arc<AtomicU32>,
    write_attempts: Arc<AtomicU32>,
    reads_fail: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(start()));
        Self {
            inner: MemoryStore::with_clock(clock.clone()),
            clock,
            pending_write_failures: Arc::new(AtomicU32::new(0)),
            write_attempts: Arc::new(AtomicU32::new(0)),
            reads_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fail the next `n` writes with a store error
    pub fn fail_next_writes(&self, n: u32) {
        self.pending_write_failures.store(n, Ordering::SeqCst);
    }

    /// Make every read fail until reset
    pub fn fail_reads(&self, fail: bool) {
        self.reads_fail.store(fail, Ordering::SeqCst);
    }

    /// Writes attempted so far, failed ones included
    pub fn write_attempts(&self) -> u32 {
        self.write_attempts.load(Ordering::SeqCst)
    }

    fn write(&self) -> RepoResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .pending_write_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            Err(DomainError::StoreError("injected write failure".into()))
        } else {
            Ok(())
        }
    }

    fn read(&self) -> RepoResult<()> {
        if self.reads_fail.load(Ordering::SeqCst) {
            Err(DomainError::StoreError("injected read failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RsvpRepository for FlakyStore {
    async fn insert(&self, rsvp: &NewRsvpResponse) -> RepoResult<RsvpResponse> {
        self.write()?;
        RsvpRepository::insert(&self.inner, rsvp).await
    }

    async fn find_all(&self, query: &RsvpQuery) -> RepoResult<Vec<RsvpResponse>> {
        self.read()?;
        RsvpRepository::find_all(&self.inner, query).await
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        self.write()?;
        self.inner.delete_all().await
    }
}

#[async_trait]
impl CommentRepository for FlakyStore {
    async fn insert(&self, comment: &NewComment) -> RepoResult<Comment> {
        self.write()?;
        CommentRepository::insert(&self.inner, comment).await
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        self.read()?;
        CommentRepository::find_by_id(&self.inner, id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Comment>> {
        self.read()?;
        CommentRepository::find_all(&self.inner).await
    }

    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32> {
        self.write()?;
        CommentRepository::increment_likes(&self.inner, id).await
    }

    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool> {
        self.write()?;
        CommentRepository::delete_owned(&self.inner, id, user_id).await
    }
}

#[async_trait]
impl ReplyRepository for FlakyStore {
    async fn insert(&self, reply: &NewReply) -> RepoResult<Reply> {
        self.write()?;
        ReplyRepository::insert(&self.inner, reply).await
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        self.read()?;
        ReplyRepository::find_by_id(&self.inner, id).await
    }

    async fn find_by_comments(&self, comment_ids: &[Uuid]) -> RepoResult<Vec<Reply>> {
        self.read()?;
        self.inner.find_by_comments(comment_ids).await
    }

    async fn increment_likes(&self, id: Uuid) -> RepoResult<i32> {
        self.write()?;
        ReplyRepository::increment_likes(&self.inner, id).await
    }

    async fn delete_owned(&self, id: Uuid, user_id: &str) -> RepoResult<bool> {
        self.write()?;
        ReplyRepository::delete_owned(&self.inner, id, user_id).await
    }
}

#[async_trait]
impl PageViewRepository for FlakyStore {
    async fn insert(&self, view: &NewPageView) -> RepoResult<PageView> {
        self.write()?;
        PageViewRepository::insert(&self.inner, view).await
    }

    async fn find_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<PageView>> {
        self.read()?;
        self.inner.find_in_range(start, end).await
    }
}
