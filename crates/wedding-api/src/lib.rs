//! # wedding-api
//!
//! REST API server built with Axum framework.
//!
//! Everything is mounted under `/api/v1`: guest-facing RSVP intake and guest
//! wall routes, page-view tracking, and the password-protected dashboard.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with, run, run_server};
pub use state::AppState;
