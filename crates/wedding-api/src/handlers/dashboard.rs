//! Dashboard login

use axum::{extract::State, Json};
use wedding_service::{DashboardAuthService, DashboardLoginRequest, DashboardTokenResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Exchange the dashboard password for a bearer token
///
/// POST /dashboard/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DashboardLoginRequest>,
) -> ApiResult<Json<DashboardTokenResponse>> {
    let service = DashboardAuthService::new(state.service_context());
    Ok(Json(service.login(request).await?))
}
