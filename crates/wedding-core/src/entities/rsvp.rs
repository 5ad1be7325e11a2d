//! RSVP entity - a guest's attendance response

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Smallest party a response may declare (the primary guest alone)
pub const MIN_PARTY_SIZE: i32 = 1;

/// Largest party a response may declare, primary guest included
pub const MAX_PARTY_SIZE: i32 = 5;

/// A named companion listed on an RSVP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalGuest {
    pub name: String,
}

impl AdditionalGuest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Stored RSVP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpResponse {
    pub id: Uuid,
    pub guest_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests: Vec<AdditionalGuest>,
    pub wants_aso_ebi: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RsvpResponse {
    /// UTC calendar day the response was received on
    #[inline]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Guests this response adds to the headcount
    #[inline]
    pub fn confirmed_guests(&self) -> i64 {
        if self.is_attending {
            i64::from(self.number_of_guests)
        } else {
            0
        }
    }
}

/// RSVP as submitted, before the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvpResponse {
    pub guest_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_attending: bool,
    pub number_of_guests: i32,
    pub additional_guests: Vec<AdditionalGuest>,
    pub wants_aso_ebi: bool,
    pub notes: Option<String>,
}

impl NewRsvpResponse {
    /// Create a minimal submission for a single guest
    pub fn new(guest_name: impl Into<String>, is_attending: bool) -> Self {
        Self {
            guest_name: guest_name.into(),
            email: None,
            phone: None,
            is_attending,
            number_of_guests: MIN_PARTY_SIZE,
            additional_guests: Vec::new(),
            wants_aso_ebi: false,
            notes: None,
        }
    }

    /// Set the party size
    pub fn with_party(mut self, number_of_guests: i32, additional: Vec<AdditionalGuest>) -> Self {
        self.number_of_guests = number_of_guests;
        self.additional_guests = additional;
        self
    }

    /// Check field constraints and normalize text fields.
    ///
    /// Names are trimmed, blank optional fields become `None`, and the
    /// companion list may hold at most `number_of_guests - 1` entries.
    pub fn validate(mut self) -> Result<Self, DomainError> {
        self.guest_name = self.guest_name.trim().to_string();
        if self.guest_name.is_empty() {
            return Err(DomainError::MissingField("guest_name"));
        }

        if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&self.number_of_guests) {
            return Err(DomainError::GuestCountOutOfRange {
                min: MIN_PARTY_SIZE,
                max: MAX_PARTY_SIZE,
            });
        }

        let max_additional = (self.number_of_guests - 1) as usize;
        if self.additional_guests.len() > max_additional {
            return Err(DomainError::TooManyAdditionalGuests { max: max_additional });
        }

        for guest in &mut self.additional_guests {
            guest.name = guest.name.trim().to_string();
            if guest.name.is_empty() {
                return Err(DomainError::MissingField("additional_guests.name"));
            }
        }

        self.email = non_blank(self.email);
        self.phone = non_blank(self.phone);
        self.notes = non_blank(self.notes);

        Ok(self)
    }

    /// Materialize into a stored response
    pub fn into_response(self, id: Uuid, created_at: DateTime<Utc>) -> RsvpResponse {
        RsvpResponse {
            id,
            guest_name: self.guest_name,
            email: self.email,
            phone: self.phone,
            is_attending: self.is_attending,
            number_of_guests: self.number_of_guests,
            additional_guests: self.additional_guests,
            wants_aso_ebi: self.wants_aso_ebi,
            notes: self.notes,
            created_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
