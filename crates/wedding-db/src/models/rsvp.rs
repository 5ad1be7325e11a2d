//! RSVP database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use wedding_core::entities::AdditionalGuest;

/// Database model for rsvp_responses table
#[derive(Debug, Clone, FromRow)]
pub struct RsvpModel {
    pub id: Uuid,
    pub guest_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests_data: Option<Json<Vec<AdditionalGuest>>>,
    pub wants_aso_ebi: Option<bool>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
