//! RSVP listing options - attendance filter and sort order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a listing option cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseFilterError {
    kind: &'static str,
    value: String,
}

/// Which responses to include by attendance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceFilter {
    #[default]
    All,
    Attending,
    NotAttending,
}

impl AttendanceFilter {
    /// Whether a response with the given attendance passes the filter
    #[inline]
    pub fn matches(self, is_attending: bool) -> bool {
        match self {
            Self::All => true,
            Self::Attending => is_attending,
            Self::NotAttending => !is_attending,
        }
    }

    /// Attendance value to filter on, if any
    #[inline]
    pub fn as_attending(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Attending => Some(true),
            Self::NotAttending => Some(false),
        }
    }
}

impl FromStr for AttendanceFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "attending" => Ok(Self::Attending),
            "not-attending" => Ok(Self::NotAttending),
            other => Err(ParseFilterError {
                kind: "attendance status",
                value: other.to_string(),
            }),
        }
    }
}

/// Field an RSVP listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpSortBy {
    /// `created_at`
    #[default]
    Date,
    /// `guest_name`, ignoring case
    Name,
    /// `number_of_guests`
    Guests,
}

impl RsvpSortBy {
    /// SQL expression backing this sort key
    pub const fn column(self) -> &'static str {
        match self {
            Self::Date => "created_at",
            Self::Name => "LOWER(guest_name)",
            Self::Guests => "number_of_guests",
        }
    }
}

impl FromStr for RsvpSortBy {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "name" => Ok(Self::Name),
            "guests" => Ok(Self::Guests),
            other => Err(ParseFilterError {
                kind: "sort field",
                value: other.to_string(),
            }),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseFilterError {
                kind: "sort direction",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}
