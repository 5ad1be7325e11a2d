//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;
use wedding_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /health/ready
///
/// 503 while the row store cannot be reached.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let store_ok = state
        .service_context()
        .store_health()
        .ping()
        .await
        .inspect_err(|e| warn!(error = %e, "Row store is not answering"))
        .is_ok();

    let readiness = ReadinessResponse::ready(store_ok);
    let status = if readiness.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(readiness))
}
