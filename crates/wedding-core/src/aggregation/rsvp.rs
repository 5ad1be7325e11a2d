//! RSVP statistics

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::{trailing_days, RSVP_WINDOW_DAYS};
use crate::entities::RsvpResponse;

/// Headline RSVP counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsvpSummary {
    pub total: u64,
    pub attending: u64,
    pub not_attending: u64,
    /// Sum of party sizes over attending responses
    pub total_guests: i64,
}

/// Responses received on one UTC day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRsvpCount {
    pub date: NaiveDate,
    pub total: u64,
    pub attending: u64,
    pub not_attending: u64,
}

impl DailyRsvpCount {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total: 0,
            attending: 0,
            not_attending: 0,
        }
    }
}

/// Dashboard statistics: summary plus the trailing daily series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpStats {
    #[serde(flatten)]
    pub summary: RsvpSummary,
    pub daily_rsvps: Vec<DailyRsvpCount>,
}

impl RsvpStats {
    /// All-zero statistics with a full series of empty days
    pub fn empty(today: NaiveDate) -> Self {
        rsvp_stats(&[], today)
    }
}

pub fn rsvp_summary(rsvps: &[RsvpResponse]) -> RsvpSummary {
    rsvps.iter().fold(RsvpSummary::default(), |mut acc, rsvp| {
        acc.total += 1;
        if rsvp.is_attending {
            acc.attending += 1;
        } else {
            acc.not_attending += 1;
        }
        acc.total_guests += rsvp.confirmed_guests();
        acc
    })
}

/// One bucket per day of the `days`-long window ending at `today`.
/// Responses outside the window are ignored.
pub fn daily_rsvp_series(rsvps: &[RsvpResponse], today: NaiveDate, days: u32) -> Vec<DailyRsvpCount> {
    let mut series: Vec<DailyRsvpCount> = trailing_days(today, days)
        .into_iter()
        .map(DailyRsvpCount::empty)
        .collect();
    let index: HashMap<NaiveDate, usize> = series
        .iter()
        .enumerate()
        .map(|(i, day)| (day.date, i))
        .collect();

    for rsvp in rsvps {
        if let Some(&i) = index.get(&rsvp.created_on()) {
            let bucket = &mut series[i];
            bucket.total += 1;
            if rsvp.is_attending {
                bucket.attending += 1;
            } else {
                bucket.not_attending += 1;
            }
        }
    }

    series
}

pub fn rsvp_stats(rsvps: &[RsvpResponse], today: NaiveDate) -> RsvpStats {
    RsvpStats {
        summary: rsvp_summary(rsvps),
        daily_rsvps: daily_rsvp_series(rsvps, today, RSVP_WINDOW_DAYS),
    }
}
