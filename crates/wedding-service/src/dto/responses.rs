//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use wedding_core::entities::AdditionalGuest;

// ============================================================================
// RSVP Responses
// ============================================================================

/// Stored RSVP as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct RsvpEntryResponse {
    pub id: Uuid,
    pub guest_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests_data: Vec<AdditionalGuest>,
    pub wants_aso_ebi: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRsvpResponse {
    pub id: Uuid,
}

/// Result of clearing every RSVP
#[derive(Debug, Clone, Serialize)]
pub struct ClearRsvpResponse {
    pub deleted: u64,
}

// ============================================================================
// Guest Wall Responses
// ============================================================================

/// Guest wall comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reply to a comment
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Comment with its replies, oldest reply first
#[derive(Debug, Clone, Serialize)]
pub struct CommentThreadResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub replies: Vec<ReplyResponse>,
}

/// New like count after a like
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub id: Uuid,
    pub likes: i32,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Recorded page view
#[derive(Debug, Clone, Serialize)]
pub struct PageViewRecordedResponse {
    pub id: Uuid,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Dashboard session token
#[derive(Debug, Clone, Serialize)]
pub struct DashboardTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
