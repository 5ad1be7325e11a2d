//! Axum extractors for request handling
//!
//! Custom extractors for dashboard auth, guest tokens, validation, path ids
//! and query strings.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{DashboardAuth, GuestToken, OptionalGuestToken, GUEST_TOKEN_HEADER};
pub use path::IdPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
