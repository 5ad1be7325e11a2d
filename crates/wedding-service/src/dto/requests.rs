//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.
//! Query DTOs are plain `Deserialize` structs converted with `TryFrom`.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use wedding_core::traits::RsvpQuery;
use wedding_core::value_objects::{AttendanceFilter, RsvpSortBy, SortDirection};

use crate::services::error::{ServiceError, ServiceResult};

// ============================================================================
// RSVP Requests
// ============================================================================

/// RSVP form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRsvpRequest {
    #[validate(length(min = 1, max = 200, message = "Guest name must be 1-200 characters"))]
    pub guest_name: String,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub is_attending: bool,

    #[serde(default = "default_number_of_guests")]
    #[validate(range(min = 1, max = 5, message = "Number of guests must be between 1 and 5"))]
    pub number_of_guests: i32,

    #[serde(default, alias = "additional_guests_data")]
    #[validate(length(max = 4, message = "At most 4 additional guests"))]
    pub additional_guests: Vec<AdditionalGuestRequest>,

    #[serde(default)]
    pub wants_aso_ebi: bool,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// Companion listed on an RSVP submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalGuestRequest {
    pub name: String,
}

fn default_number_of_guests() -> i32 {
    1
}

/// Dashboard RSVP list filter (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpListQuery {
    pub attendance_status: Option<AttendanceFilter>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<RsvpSortBy>,
    pub sort_direction: Option<SortDirection>,
}

impl TryFrom<RsvpListQuery> for RsvpQuery {
    type Error = ServiceError;

    fn try_from(query: RsvpListQuery) -> ServiceResult<Self> {
        Ok(Self {
            attendance: query.attendance_status.unwrap_or_default(),
            start: parse_date_bound(query.start_date.as_deref(), DateBound::Start)?,
            end: parse_date_bound(query.end_date.as_deref(), DateBound::End)?,
            sort_by: query.sort_by.unwrap_or_default(),
            direction: query.sort_direction.unwrap_or_default(),
            limit: None,
        })
    }
}

/// Recent responses card
#[derive(Debug, Clone, Deserialize)]
pub struct RecentRsvpQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

fn default_recent_limit() -> i64 {
    5
}

impl Default for RecentRsvpQuery {
    fn default() -> Self {
        Self {
            limit: default_recent_limit(),
        }
    }
}

/// Clear-all confirmation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearRsvpQuery {
    #[serde(default)]
    pub confirm: bool,
}

// ============================================================================
// Guest Wall Requests
// ============================================================================

/// New guest wall comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

/// New reply to a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

// ============================================================================
// Analytics Requests
// ============================================================================

/// Page view beacon
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPageViewRequest {
    #[validate(length(min = 1, max = 512, message = "Page must be 1-512 characters"))]
    pub page: String,

    #[serde(alias = "user_session_id")]
    #[validate(length(min = 1, max = 128, message = "Session id must be 1-128 characters"))]
    pub session_id: String,

    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
}

/// Analytics date range (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AnalyticsQuery {
    /// Parsed inclusive bounds
    pub fn bounds(&self) -> ServiceResult<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
        Ok((
            parse_date_bound(self.start_date.as_deref(), DateBound::Start)?,
            parse_date_bound(self.end_date.as_deref(), DateBound::End)?,
        ))
    }
}

// ============================================================================
// Dashboard Requests
// ============================================================================

/// Dashboard login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DashboardLoginRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Date bounds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateBound {
    Start,
    End,
}

/// Accept RFC 3339 timestamps or bare `YYYY-MM-DD` days.
///
/// A bare day expands to its first millisecond for a start bound and to its
/// last millisecond for an end bound, so both ends are inclusive.
fn parse_date_bound(raw: Option<&str>, bound: DateBound) -> ServiceResult<Option<DateTime<Utc>>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(instant.with_timezone(&Utc)));
    }

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::validation(format!("invalid date: {raw}")))?;
    let time = match bound {
        DateBound::Start => NaiveTime::MIN,
        DateBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| ServiceError::internal("invalid end-of-day time"))?,
    };

    Ok(Some(Utc.from_utc_datetime(&day.and_time(time))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wedding_core::entities::MAX_AUTHOR_NAME_LENGTH;

    #[test]
    fn test_submit_rsvp_defaults() {
        let request: SubmitRsvpRequest =
            serde_json::from_str(r#"{"guest_name":"Ada","is_attending":true}"#).unwrap();

        assert_eq!(request.number_of_guests, 1);
        assert!(request.additional_guests.is_empty());
        assert!(!request.wants_aso_ebi);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_submit_rsvp_accepts_column_alias() {
        let request: SubmitRsvpRequest = serde_json::from_str(
            r#"{"guest_name":"Ada","is_attending":true,"number_of_guests":2,
                "additional_guests_data":[{"name":"Grace"}]}"#,
        )
        .unwrap();

        assert_eq!(request.additional_guests.len(), 1);
        assert_eq!(request.additional_guests[0].name, "Grace");
    }

    #[test]
    fn test_submit_rsvp_party_size_range() {
        let mut request: SubmitRsvpRequest =
            serde_json::from_str(r#"{"guest_name":"Ada","is_attending":true}"#).unwrap();

        request.number_of_guests = 6;
        assert!(request.validate().is_err());

        request.number_of_guests = 0;
        assert!(request.validate().is_err());

        request.number_of_guests = 5;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_submit_rsvp_companion_list_capped() {
        let mut request: SubmitRsvpRequest =
            serde_json::from_str(r#"{"guest_name":"Ada","is_attending":true}"#).unwrap();
        request.number_of_guests = 5;

        request.additional_guests = (0..4)
            .map(|i| AdditionalGuestRequest { name: format!("Guest {i}") })
            .collect();
        assert!(request.validate().is_ok());

        request.additional_guests.push(AdditionalGuestRequest {
            name: "One too many".into(),
        });
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("additional_guests"));
    }

    #[test]
    fn test_comment_request_validation() {
        let ok = CreateCommentRequest {
            name: "Ada".into(),
            message: "Congratulations!".into(),
        };
        assert!(ok.validate().is_ok());

        let long = CreateCommentRequest {
            name: "a".repeat(MAX_AUTHOR_NAME_LENGTH + 1),
            message: "hi".into(),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_list_query_defaults() {
        let query = RsvpQuery::try_from(RsvpListQuery::default()).unwrap();

        assert_eq!(query.attendance, AttendanceFilter::All);
        assert_eq!(query.sort_by, RsvpSortBy::Date);
        assert_eq!(query.direction, SortDirection::Desc);
        assert!(query.start.is_none());
        assert!(query.end.is_none());
    }

    #[test]
    fn test_list_query_parses_filters() {
        let raw: RsvpListQuery = serde_json::from_str(
            r#"{"attendance_status":"not-attending","sort_by":"guests","sort_direction":"asc",
                "start_date":"2025-06-01","end_date":"2025-06-30"}"#,
        )
        .unwrap();
        let query = RsvpQuery::try_from(raw).unwrap();

        assert_eq!(query.attendance, AttendanceFilter::NotAttending);
        assert_eq!(query.sort_by, RsvpSortBy::Guests);
        assert_eq!(query.direction, SortDirection::Asc);
        assert_eq!(
            query.start.unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            query.end.unwrap().to_rfc3339(),
            "2025-06-30T23:59:59.999+00:00"
        );
    }

    #[test]
    fn test_date_bound_rfc3339() {
        let parsed = parse_date_bound(Some("2025-06-14T10:30:00+01:00"), DateBound::Start)
            .unwrap()
            .unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 14, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_date_bound_rejects_garbage() {
        let err = parse_date_bound(Some("next tuesday"), DateBound::End).unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert!(parse_date_bound(Some("  "), DateBound::End).unwrap().is_none());
    }
}
