//! RSVP handlers
//!
//! Public intake plus the dashboard views over stored responses.

use axum::{extract::State, Json};
use wedding_core::{RsvpQuery, RsvpStats};
use wedding_service::{
    ClearRsvpQuery, ClearRsvpResponse, RecentRsvpQuery, RsvpEntryResponse, RsvpListQuery,
    RsvpService, SubmitRsvpRequest, SubmitRsvpResponse,
};

use crate::extractors::{ApiQuery, DashboardAuth, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, CsvAttachment};
use crate::state::AppState;

/// File name offered for the CSV download
const EXPORT_FILENAME: &str = "wedding-rsvp-responses.csv";

/// Submit an RSVP
///
/// POST /rsvp
pub async fn submit_rsvp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitRsvpRequest>,
) -> ApiResult<Created<Json<SubmitRsvpResponse>>> {
    let service = RsvpService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// List responses with filters and sorting
///
/// GET /rsvp
pub async fn list_rsvps(
    State(state): State<AppState>,
    _auth: DashboardAuth,
    ApiQuery(query): ApiQuery<RsvpListQuery>,
) -> ApiResult<Json<Vec<RsvpEntryResponse>>> {
    let query = RsvpQuery::try_from(query)?;

    let service = RsvpService::new(state.service_context());
    Ok(Json(service.list(query).await))
}

/// Most recent responses
///
/// GET /rsvp/recent
pub async fn recent_rsvps(
    State(state): State<AppState>,
    _auth: DashboardAuth,
    ApiQuery(query): ApiQuery<RecentRsvpQuery>,
) -> ApiResult<Json<Vec<RsvpEntryResponse>>> {
    let service = RsvpService::new(state.service_context());
    Ok(Json(service.recent(query.limit).await))
}

/// Headline totals and the daily series
///
/// GET /rsvp/stats
pub async fn rsvp_stats(
    State(state): State<AppState>,
    _auth: DashboardAuth,
) -> ApiResult<Json<RsvpStats>> {
    let service = RsvpService::new(state.service_context());
    Ok(Json(service.statistics().await))
}

/// Download responses as CSV, honouring the list filters
///
/// GET /rsvp/export
pub async fn export_rsvps(
    State(state): State<AppState>,
    _auth: DashboardAuth,
    ApiQuery(query): ApiQuery<RsvpListQuery>,
) -> ApiResult<CsvAttachment> {
    let query = RsvpQuery::try_from(query)?;

    let service = RsvpService::new(state.service_context());
    Ok(CsvAttachment {
        filename: EXPORT_FILENAME,
        body: service.export_csv(query).await,
    })
}

/// Delete every response
///
/// DELETE /rsvp?confirm=true
pub async fn clear_rsvps(
    State(state): State<AppState>,
    _auth: DashboardAuth,
    ApiQuery(query): ApiQuery<ClearRsvpQuery>,
) -> ApiResult<Json<ClearRsvpResponse>> {
    if !query.confirm {
        return Err(ApiError::ConfirmationRequired);
    }

    let service = RsvpService::new(state.service_context());
    let deleted = service.clear_all().await?;
    Ok(Json(ClearRsvpResponse { deleted }))
}
