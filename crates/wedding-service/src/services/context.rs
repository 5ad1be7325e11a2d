//! Service context - dependency container for services
//!
//! Holds the repositories, the submission gate, the retry policy and the
//! dashboard credentials needed by services.

use std::sync::Arc;

use wedding_common::auth::JwtService;
use wedding_common::{AppConfig, SubmissionLimitConfig};
use wedding_core::traits::{
    Clock, CommentRepository, PageViewRepository, ReplyRepository, RsvpRepository, StoreHealth,
    SystemClock,
};
use wedding_db::{
    MemoryStore, PgCommentRepository, PgPageViewRepository, PgPool, PgReplyRepository,
    PgRsvpRepository, PgStoreHealth,
};

use super::error::{ServiceError, ServiceResult};
use super::rate_limit::RateLimiter;
use super::retry::RetryPolicy;

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    rsvp_repo: Arc<dyn RsvpRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    page_view_repo: Arc<dyn PageViewRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Dashboard auth
    jwt_service: Arc<JwtService>,
    dashboard_password_hash: Arc<str>,

    // Write path
    rate_limiter: Arc<RateLimiter>,
    retry_policy: RetryPolicy,

    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the RSVP repository
    pub fn rsvp_repo(&self) -> &dyn RsvpRepository {
        self.rsvp_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the page view repository
    pub fn page_view_repo(&self) -> &dyn PageViewRepository {
        self.page_view_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Argon2 hash of the dashboard password
    pub fn dashboard_password_hash(&self) -> &str {
        &self.dashboard_password_hash
    }

    // === Write path ===

    /// Get the RSVP submission gate
    pub fn rate_limiter(&self) -> &RateLimiter {
        self.rate_limiter.as_ref()
    }

    /// Get the retry policy for store writes
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("rate_limiter", &self.rate_limiter)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    rsvp_repo: Option<Arc<dyn RsvpRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    page_view_repo: Option<Arc<dyn PageViewRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    jwt_service: Option<Arc<JwtService>>,
    dashboard_password_hash: Option<String>,
    rate_limiter: Option<Arc<RateLimiter>>,
    submission_limit: SubmissionLimitConfig,
    retry_policy: RetryPolicy,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            rsvp_repo: None,
            comment_repo: None,
            reply_repo: None,
            page_view_repo: None,
            store_health: None,
            jwt_service: None,
            dashboard_password_hash: None,
            rate_limiter: None,
            submission_limit: SubmissionLimitConfig::default(),
            retry_policy: RetryPolicy::default(),
            clock: None,
        }
    }

    /// Take auth, submission gate and retry settings from `config`
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.jwt_service = Some(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.dashboard.session_ttl,
        )));
        self.dashboard_password_hash = Some(config.dashboard.password_hash.clone());
        self.submission_limit = config.submission_limit.clone();
        self.retry_policy =
            RetryPolicy::from(&config.retry).with_jitter(config.app.env.is_production());
        self
    }

    /// Back every repository with one in-memory store
    pub fn memory_store(self, store: MemoryStore) -> Self {
        let store = Arc::new(store);
        self.rsvp_repo(store.clone())
            .comment_repo(store.clone())
            .reply_repo(store.clone())
            .page_view_repo(store.clone())
            .store_health(store)
    }

    /// Back every repository with PostgreSQL
    pub fn postgres(self, pool: PgPool) -> Self {
        self.rsvp_repo(Arc::new(PgRsvpRepository::new(pool.clone())))
            .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
            .reply_repo(Arc::new(PgReplyRepository::new(pool.clone())))
            .page_view_repo(Arc::new(PgPageViewRepository::new(pool.clone())))
            .store_health(Arc::new(PgStoreHealth::new(pool)))
    }

    pub fn rsvp_repo(mut self, repo: Arc<dyn RsvpRepository>) -> Self {
        self.rsvp_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn page_view_repo(mut self, repo: Arc<dyn PageViewRepository>) -> Self {
        self.page_view_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn dashboard_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.dashboard_password_hash = Some(hash.into());
        self
    }

    pub fn rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the ServiceContext
    ///
    /// When no rate limiter is supplied, one is created from the submission
    /// limit settings and the context clock.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let rate_limiter = self.rate_limiter.unwrap_or_else(|| {
            Arc::new(RateLimiter::new(
                self.submission_limit.window(),
                self.submission_limit.max_requests,
                clock.clone(),
            ))
        });

        Ok(ServiceContext {
            rsvp_repo: self
                .rsvp_repo
                .ok_or_else(|| ServiceError::validation("rsvp_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reply_repo: self
                .reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            page_view_repo: self
                .page_view_repo
                .ok_or_else(|| ServiceError::validation("page_view_repo is required"))?,
            store_health: self
                .store_health
                .ok_or_else(|| ServiceError::validation("store_health is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            dashboard_password_hash: self
                .dashboard_password_hash
                .ok_or_else(|| ServiceError::validation("dashboard_password_hash is required"))?
                .into(),
            rate_limiter,
            retry_policy: self.retry_policy,
            clock,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
