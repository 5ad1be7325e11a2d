//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A fresh guest token, as a browser would generate one
pub fn guest_token() -> String {
    format!("guest-{}", Uuid::new_v4())
}

/// Companion on an RSVP
#[derive(Debug, Clone, Serialize)]
pub struct AdditionalGuest {
    pub name: String,
}

/// RSVP form submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRsvp {
    pub guest_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests: Vec<AdditionalGuest>,
    pub wants_aso_ebi: bool,
    pub notes: Option<String>,
}

impl SubmitRsvp {
    /// An attending guest with a unique name
    pub fn attending(party_size: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            guest_name: format!("Guest {suffix}"),
            email: Some(format!("guest{suffix}@example.com")),
            phone: None,
            is_attending: true,
            number_of_guests: party_size,
            additional_guests: (1..party_size)
                .map(|i| AdditionalGuest {
                    name: format!("Companion {suffix}-{i}"),
                })
                .collect(),
            wants_aso_ebi: false,
            notes: None,
        }
    }

    /// A guest sending regrets
    pub fn declining() -> Self {
        Self {
            is_attending: false,
            ..Self::attending(1)
        }
    }
}

/// Created RSVP
#[derive(Debug, Deserialize)]
pub struct SubmitRsvpResponse {
    pub id: Uuid,
}

/// Stored RSVP as the dashboard lists it
#[derive(Debug, Deserialize)]
pub struct RsvpEntry {
    pub id: Uuid,
    pub guest_name: String,
    pub email: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests_data: Vec<serde_json::Value>,
    pub wants_aso_ebi: bool,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Guest wall post body, shared by comments and replies
#[derive(Debug, Clone, Serialize)]
pub struct WallPost {
    pub name: String,
    pub message: String,
}

impl WallPost {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Comment as posted or listed
#[derive(Debug, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    #[serde(default)]
    pub replies: Vec<ReplyView>,
}

/// Reply as posted or listed
#[derive(Debug, Deserialize)]
pub struct ReplyView {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
}

/// Result of a like
#[derive(Debug, Deserialize)]
pub struct LikeView {
    pub id: Uuid,
    pub likes: i32,
}

/// Page view beacon
#[derive(Debug, Clone, Serialize)]
pub struct PageViewBeacon {
    pub page: String,
    pub session_id: String,
    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
}

impl PageViewBeacon {
    pub fn new(page: &str, session_id: &str, device: Option<&str>) -> Self {
        Self {
            page: page.to_string(),
            session_id: session_id.to_string(),
            referrer: None,
            browser: None,
            device: device.map(str::to_string),
        }
    }
}
