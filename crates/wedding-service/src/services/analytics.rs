//! Page view tracking and the analytics dashboard

use tracing::{debug, instrument, warn};
use validator::Validate;

use wedding_core::aggregation::{analytics_report, AnalyticsReport};
use wedding_core::entities::NewPageView;

use crate::dto::{AnalyticsQuery, PageViewRecordedResponse, RecordPageViewRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store one page view
    #[instrument(skip(self, request), fields(page = %request.page))]
    pub async fn record_page_view(
        &self,
        request: RecordPageViewRequest,
    ) -> ServiceResult<PageViewRecordedResponse> {
        request.validate()?;
        let view = NewPageView::from(request).validate()?;

        let stored = self
            .ctx
            .page_view_repo()
            .insert(&view)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to record page view"))?;

        debug!(page_view_id = %stored.id, "Page view recorded");

        Ok(PageViewRecordedResponse { id: stored.id })
    }

    /// Dashboard report over the requested range; empty when the store is
    /// unreachable
    #[instrument(skip(self))]
    pub async fn report(&self, query: AnalyticsQuery) -> ServiceResult<AnalyticsReport> {
        let (start, end) = query.bounds()?;
        let today = self.ctx.clock().today();

        match self.ctx.page_view_repo().find_in_range(start, end).await {
            Ok(views) => Ok(analytics_report(&views, today)),
            Err(e) => {
                warn!(error = %e, "Failed to load page views");
                Ok(AnalyticsReport::empty(today))
            }
        }
    }
}
