//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DashboardConfig, DatabaseConfig,
    Environment, HttpRateLimitConfig, JwtConfig, RetryConfig, ServerConfig,
    SubmissionLimitConfig, MEMORY_DATABASE_URL,
};
