//! # wedding-common
//!
//! Shared utilities including configuration, error handling, dashboard
//! authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, DashboardClaims, JwtService, SessionToken};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DashboardConfig, DatabaseConfig,
    Environment, HttpRateLimitConfig, JwtConfig, RetryConfig, ServerConfig,
    SubmissionLimitConfig,
};
pub use error::{domain_error_code, domain_status_code, AppError};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
