//! Aggregation engine - pure summaries over rows already loaded from the store
//!
//! Every function here is deterministic: the reference day is passed in
//! rather than read from a clock, and empty input yields zeroed structures.

mod page_views;
mod rsvp;

use chrono::{Duration, NaiveDate};

pub use page_views::{
    analytics_report, daily_visitor_series, device_breakdown, top_pages, unique_visitors,
    AnalyticsReport, DailyVisitors, DeviceBreakdown, PageRank,
};
pub use rsvp::{daily_rsvp_series, rsvp_stats, rsvp_summary, DailyRsvpCount, RsvpStats, RsvpSummary};

/// Days covered by the RSVP daily series
pub const RSVP_WINDOW_DAYS: u32 = 14;

/// Days covered by the visitor daily series
pub const PAGE_VIEW_WINDOW_DAYS: u32 = 30;

/// Entries kept in the top pages ranking
pub const TOP_PAGES_LIMIT: usize = 10;

/// `part` as a percentage of `total`; zero when `total` is zero
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// The `days` calendar days ending at `today`, oldest first
pub(crate) fn trailing_days(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .rev()
        .map(|back| today - Duration::days(back))
        .collect()
}
