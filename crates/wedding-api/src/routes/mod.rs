//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{analytics, comments, dashboard, health, rsvp};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes, kept outside the HTTP throttle
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(rsvp_routes())
        .merge(comment_routes())
        .merge(analytics_routes())
        .merge(dashboard_routes())
}

/// RSVP intake and dashboard views
fn rsvp_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rsvp",
            post(rsvp::submit_rsvp)
                .get(rsvp::list_rsvps)
                .delete(rsvp::clear_rsvps),
        )
        .route("/rsvp/recent", get(rsvp::recent_rsvps))
        .route("/rsvp/stats", get(rsvp::rsvp_stats))
        .route("/rsvp/export", get(rsvp::export_rsvps))
}

/// Guest wall
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route("/comments/:comment_id/like", post(comments::like_comment))
        .route("/comments/:comment_id/replies", post(comments::create_reply))
        .route("/replies/:reply_id", delete(comments::delete_reply))
        .route("/replies/:reply_id/like", post(comments::like_reply))
}

/// Page views and the visitor report
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/page-views", post(analytics::record_page_view))
        .route("/analytics", get(analytics::analytics_report))
}

/// Dashboard session
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/login", post(dashboard::login))
}
