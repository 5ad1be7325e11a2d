//! Device class - coarse bucket for a client's device string

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device bucket used by visitor analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Desktop,
    Tablet,
    Other,
}

impl DeviceClass {
    /// Classify a raw device string.
    ///
    /// Rules are checked in order against the lowercased string and the first
    /// match wins:
    /// - contains `mobile` or `phone` => `Mobile`
    /// - contains `desktop` => `Desktop`
    /// - contains `tablet` or `ipad` => `Tablet`
    /// - anything else, including a missing value => `Other`
    pub fn classify(device: Option<&str>) -> Self {
        let device = device.unwrap_or_default().to_lowercase();

        if device.contains("mobile") || device.contains("phone") {
            Self::Mobile
        } else if device.contains("desktop") {
            Self::Desktop
        } else if device.contains("tablet") || device.contains("ipad") {
            Self::Tablet
        } else {
            Self::Other
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
