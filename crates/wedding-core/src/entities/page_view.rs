//! Page view entity - one tracked page visit

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::DeviceClass;

/// Recorded page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub id: Uuid,
    pub page: String,
    pub user_session_id: String,
    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PageView {
    /// UTC calendar day of the visit
    #[inline]
    pub fn viewed_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Device bucket of the visit
    #[inline]
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::classify(self.device.as_deref())
    }
}

/// Page view as reported by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPageView {
    pub page: String,
    pub user_session_id: String,
    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
}

impl NewPageView {
    pub fn new(page: impl Into<String>, user_session_id: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            user_session_id: user_session_id.into(),
            referrer: None,
            browser: None,
            device: None,
        }
    }

    /// Set the device string
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Require page and session id; blank optional fields become `None`
    pub fn validate(mut self) -> Result<Self, DomainError> {
        self.page = self.page.trim().to_string();
        self.user_session_id = self.user_session_id.trim().to_string();
        if self.page.is_empty() {
            return Err(DomainError::MissingField("page"));
        }
        if self.user_session_id.is_empty() {
            return Err(DomainError::MissingField("session_id"));
        }
        self.referrer = self.referrer.filter(|v| !v.trim().is_empty());
        self.browser = self.browser.filter(|v| !v.trim().is_empty());
        self.device = self.device.filter(|v| !v.trim().is_empty());
        Ok(self)
    }

    /// Materialize into a stored view
    pub fn into_page_view(self, id: Uuid, created_at: DateTime<Utc>) -> PageView {
        PageView {
            id,
            page: self.page,
            user_session_id: self.user_session_id,
            referrer: self.referrer,
            browser: self.browser,
            device: self.device,
            created_at,
        }
    }
}
