//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::hash_password;

/// `DATABASE_URL` value that selects the in-process store
pub const MEMORY_DATABASE_URL: &str = "memory://";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub dashboard: DashboardConfig,
    pub submission_limit: SubmissionLimitConfig,
    pub http_rate_limit: HttpRateLimitConfig,
    pub retry: RetryConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Row store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Whether the in-process store was requested instead of PostgreSQL
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with(MEMORY_DATABASE_URL)
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

/// Dashboard gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Argon2 PHC string of the shared dashboard password
    pub password_hash: String,
    /// Lifetime of an issued dashboard token, in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl: i64,
}

/// Submission gate in front of RSVP intake
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionLimitConfig {
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,
}

impl SubmissionLimitConfig {
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Global HTTP throttle
#[derive(Debug, Clone, Deserialize)]
pub struct HttpRateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// Retry policy for store writes
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for SubmissionLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
        }
    }
}

impl Default for HttpRateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "wedding-rsvp".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_session_ttl() -> i64 {
    86400 // 24 hours
}

fn default_window_ms() -> u64 {
    1000
}

fn default_max_requests() -> usize {
    5
}

fn default_requests_per_second() -> u32 {
    20
}

fn default_burst() -> u32 {
    100
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_max_delay_ms() -> u64 {
    10_000
}

/// Parse an optional variable, falling back to `default` when unset
fn var_or<T: FromStr>(key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        Err(_) => Ok(default()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: var_or("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: var_or("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
            },
            dashboard: DashboardConfig {
                password_hash: dashboard_password_hash()?,
                session_ttl: var_or("DASHBOARD_SESSION_TTL", default_session_ttl)?,
            },
            submission_limit: SubmissionLimitConfig {
                window_ms: var_or("RATE_LIMIT_WINDOW_MS", default_window_ms)?,
                max_requests: var_or("RATE_LIMIT_MAX_REQUESTS", default_max_requests)?,
            },
            http_rate_limit: HttpRateLimitConfig {
                requests_per_second: var_or("HTTP_RATE_LIMIT_PER_SECOND", default_requests_per_second)?,
                burst: var_or("HTTP_RATE_LIMIT_BURST", default_burst)?,
            },
            retry: RetryConfig {
                max_attempts: var_or("RETRY_MAX_ATTEMPTS", default_max_attempts)?,
                base_delay_ms: var_or("RETRY_BASE_DELAY_MS", default_base_delay_ms)?,
                backoff_multiplier: var_or("RETRY_BACKOFF_MULTIPLIER", default_backoff_multiplier)?,
                max_delay_ms: var_or("RETRY_MAX_DELAY_MS", default_max_delay_ms)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot work at runtime
    ///
    /// # Errors
    /// Returns the first offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submission_limit.window_ms == 0 {
            return Err(ConfigError::InvalidValue("RATE_LIMIT_WINDOW_MS", "0".to_string()));
        }
        if self.submission_limit.max_requests == 0 {
            return Err(ConfigError::InvalidValue("RATE_LIMIT_MAX_REQUESTS", "0".to_string()));
        }
        if self.http_rate_limit.requests_per_second == 0 {
            return Err(ConfigError::InvalidValue("HTTP_RATE_LIMIT_PER_SECOND", "0".to_string()));
        }
        if self.http_rate_limit.burst == 0 {
            return Err(ConfigError::InvalidValue("HTTP_RATE_LIMIT_BURST", "0".to_string()));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue("RETRY_MAX_ATTEMPTS", "0".to_string()));
        }
        if self.retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue(
                "RETRY_BACKOFF_MULTIPLIER",
                self.retry.backoff_multiplier.to_string(),
            ));
        }
        if self.dashboard.session_ttl <= 0 {
            return Err(ConfigError::InvalidValue(
                "DASHBOARD_SESSION_TTL",
                self.dashboard.session_ttl.to_string(),
            ));
        }
        Ok(())
    }
}

/// Prefer a precomputed hash; otherwise hash the plain password once at startup
fn dashboard_password_hash() -> Result<String, ConfigError> {
    if let Ok(hash) = env::var("DASHBOARD_PASSWORD_HASH") {
        return Ok(hash);
    }

    let password = env::var("DASHBOARD_PASSWORD")
        .map_err(|_| ConfigError::MissingVar("DASHBOARD_PASSWORD_HASH"))?;
    hash_password(&password)
        .map_err(|e| ConfigError::InvalidValue("DASHBOARD_PASSWORD", e.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
