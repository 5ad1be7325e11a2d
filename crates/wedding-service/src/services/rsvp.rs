//! RSVP service
//!
//! Handles guest submissions and the dashboard views over them.

use tracing::{info, instrument, warn};
use validator::Validate;

use wedding_core::aggregation::{rsvp_stats, RsvpStats};
use wedding_core::entities::{NewRsvpResponse, RsvpResponse};
use wedding_core::traits::RsvpQuery;
use wedding_core::DomainError;

use crate::dto::{RsvpEntryResponse, SubmitRsvpRequest, SubmitRsvpResponse};

use super::context::ServiceContext;
use super::csv::render_rsvp_csv;
use super::error::{ServiceError, ServiceResult};
use super::retry::with_retry_if;

/// Largest page the recent-responses card may ask for
const MAX_RECENT_LIMIT: i64 = 50;

/// RSVP service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate, gate and store one submission
    #[instrument(skip(self, request), fields(attending = request.is_attending))]
    pub async fn submit(&self, request: SubmitRsvpRequest) -> ServiceResult<SubmitRsvpResponse> {
        request.validate()?;
        let rsvp = NewRsvpResponse::from(request).validate()?;

        let limiter = self.ctx.rate_limiter();
        if !limiter.allow() {
            let retry_after = limiter.retry_after();
            warn!(retry_after_ms = retry_after.as_millis() as u64, "RSVP submission rate limited");
            return Err(ServiceError::rate_limited(retry_after));
        }

        let stored = with_retry_if(
            self.ctx.retry_policy(),
            || self.ctx.rsvp_repo().insert(&rsvp),
            DomainError::is_retryable,
        )
        .await?;

        info!(
            rsvp_id = %stored.id,
            guests = stored.number_of_guests,
            "RSVP received"
        );

        Ok(SubmitRsvpResponse { id: stored.id })
    }

    /// Filtered and sorted responses; empty when the store is unreachable
    #[instrument(skip(self))]
    pub async fn list(&self, query: RsvpQuery) -> Vec<RsvpEntryResponse> {
        self.load(&query)
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Most recent `limit` responses
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: i64) -> Vec<RsvpEntryResponse> {
        let query = RsvpQuery::recent(limit.clamp(1, MAX_RECENT_LIMIT));
        self.list(query).await
    }

    /// Headline totals and the trailing daily series
    #[instrument(skip(self))]
    pub async fn statistics(&self) -> RsvpStats {
        let today = self.ctx.clock().today();

        match self.ctx.rsvp_repo().find_all(&RsvpQuery::default()).await {
            Ok(rsvps) => rsvp_stats(&rsvps, today),
            Err(e) => {
                warn!(error = %e, "Failed to load RSVPs for statistics");
                RsvpStats::empty(today)
            }
        }
    }

    /// Delete every response, returning how many were removed
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> ServiceResult<u64> {
        let deleted = self.ctx.rsvp_repo().delete_all().await?;

        info!(deleted, "All RSVP responses cleared");

        Ok(deleted)
    }

    /// Filtered responses rendered as CSV
    #[instrument(skip(self))]
    pub async fn export_csv(&self, query: RsvpQuery) -> String {
        let rsvps = self.load(&query).await;

        info!(rows = rsvps.len(), "RSVP export generated");

        render_rsvp_csv(&rsvps)
    }

    async fn load(&self, query: &RsvpQuery) -> Vec<RsvpResponse> {
        match self.ctx.rsvp_repo().find_all(query).await {
            Ok(rsvps) => rsvps,
            Err(e) => {
                warn!(error = %e, "Failed to load RSVPs");
                Vec::new()
            }
        }
    }
}
