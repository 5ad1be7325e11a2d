//! Visitor analytics over page views

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::{percentage, trailing_days, PAGE_VIEW_WINDOW_DAYS, TOP_PAGES_LIMIT};
use crate::entities::PageView;
use crate::value_objects::DeviceClass;

/// Traffic on one UTC day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyVisitors {
    pub date: NaiveDate,
    /// Distinct sessions seen that day
    pub visitors: u64,
    pub page_views: u64,
}

/// Page views per device class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeviceBreakdown {
    pub mobile: u64,
    pub desktop: u64,
    pub tablet: u64,
    pub other: u64,
}

impl DeviceBreakdown {
    pub fn record(&mut self, class: DeviceClass) {
        match class {
            DeviceClass::Mobile => self.mobile += 1,
            DeviceClass::Desktop => self.desktop += 1,
            DeviceClass::Tablet => self.tablet += 1,
            DeviceClass::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.mobile + self.desktop + self.tablet + self.other
    }
}

/// Entry in the top pages ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRank {
    pub page: String,
    pub views: u64,
    pub percentage: f64,
}

/// Everything the analytics dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_visitors: u64,
    pub total_page_views: u64,
    pub daily_visitors: Vec<DailyVisitors>,
    pub device_breakdown: DeviceBreakdown,
    pub top_pages: Vec<PageRank>,
}

impl AnalyticsReport {
    /// Report for a range with no traffic
    pub fn empty(today: NaiveDate) -> Self {
        analytics_report(&[], today)
    }
}

/// Distinct session ids
pub fn unique_visitors(views: &[PageView]) -> u64 {
    views
        .iter()
        .map(|v| v.user_session_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64
}

/// One bucket per day of the `days`-long window ending at `today`
pub fn daily_visitor_series(views: &[PageView], today: NaiveDate, days: u32) -> Vec<DailyVisitors> {
    let window = trailing_days(today, days);
    let mut buckets: HashMap<NaiveDate, (u64, HashSet<&str>)> = window
        .iter()
        .map(|&day| (day, (0, HashSet::new())))
        .collect();

    for view in views {
        if let Some((count, sessions)) = buckets.get_mut(&view.viewed_on()) {
            *count += 1;
            sessions.insert(view.user_session_id.as_str());
        }
    }

    window
        .into_iter()
        .map(|date| {
            let (page_views, visitors) = buckets
                .get(&date)
                .map_or((0, 0), |(count, sessions)| (*count, sessions.len() as u64));
            DailyVisitors {
                date,
                visitors,
                page_views,
            }
        })
        .collect()
}

pub fn device_breakdown(views: &[PageView]) -> DeviceBreakdown {
    let mut breakdown = DeviceBreakdown::default();
    for view in views {
        breakdown.record(view.device_class());
    }
    breakdown
}

/// Most viewed pages, highest count first.
/// Equal counts keep the order in which pages were first seen.
pub fn top_pages(views: &[PageView], limit: usize) -> Vec<PageRank> {
    let mut order: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for view in views {
        let page = view.page.as_str();
        match index.get(page) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(page, order.len());
                order.push((page, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let total = views.len() as u64;
    order
        .into_iter()
        .take(limit)
        .map(|(page, count)| PageRank {
            page: page.to_string(),
            views: count,
            percentage: percentage(count, total),
        })
        .collect()
}

pub fn analytics_report(views: &[PageView], today: NaiveDate) -> AnalyticsReport {
    AnalyticsReport {
        total_visitors: unique_visitors(views),
        total_page_views: views.len() as u64,
        daily_visitors: daily_visitor_series(views, today, PAGE_VIEW_WINDOW_DAYS),
        device_breakdown: device_breakdown(views),
        top_pages: top_pages(views, TOP_PAGES_LIMIT),
    }
}
