//! Page view database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for page_views table
#[derive(Debug, Clone, FromRow)]
pub struct PageViewModel {
    pub id: Uuid,
    pub page: String,
    pub user_session_id: String,
    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
    pub created_at: DateTime<Utc>,
}
