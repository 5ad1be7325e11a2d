//! Dashboard authentication utilities

mod jwt;
mod password;

pub use jwt::{DashboardClaims, JwtService, SessionToken, DASHBOARD_SUBJECT};
pub use password::{hash_password, verify_password};
