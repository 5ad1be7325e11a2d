//! Page view tracking and the analytics report

use axum::{extract::State, Json};
use wedding_core::AnalyticsReport;
use wedding_service::{
    AnalyticsQuery, AnalyticsService, PageViewRecordedResponse, RecordPageViewRequest,
};

use crate::extractors::{ApiQuery, DashboardAuth, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a page view
///
/// POST /page-views
pub async fn record_page_view(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecordPageViewRequest>,
) -> ApiResult<Created<Json<PageViewRecordedResponse>>> {
    let service = AnalyticsService::new(state.service_context());
    let response = service.record_page_view(request).await?;
    Ok(Created(Json(response)))
}

/// Visitor report over an optional date range
///
/// GET /analytics
pub async fn analytics_report(
    State(state): State<AppState>,
    _auth: DashboardAuth,
    ApiQuery(query): ApiQuery<AnalyticsQuery>,
) -> ApiResult<Json<AnalyticsReport>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.report(query).await?))
}
