//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod analytics;
pub mod comments;
pub mod dashboard;
pub mod health;
pub mod rsvp;
