//! Tracing and logging setup
//!
//! `RUST_LOG` wins when set; otherwise each profile carries its own filter
//! directives.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Subscriber settings for one deployment profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub directives: String,
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
    /// Emit an event when a span closes, with its busy/idle time
    pub span_timings: bool,
    /// Source file and line of each event
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl TracingConfig {
    /// Debug output for the wedding crates, quieter dependencies
    #[must_use]
    pub fn development() -> Self {
        Self {
            directives: "info,wedding_api=debug,wedding_service=debug,wedding_db=debug,sqlx=warn"
                .to_string(),
            json: false,
            span_timings: true,
            file_line: true,
        }
    }

    /// JSON lines at info, suitable for log shipping
    #[must_use]
    pub fn production() -> Self {
        Self {
            directives: "info,sqlx=warn".to_string(),
            json: true,
            span_timings: false,
            file_line: false,
        }
    }

    /// Profile matching the deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails when a subscriber is already installed, e.g. by another test.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.directives))
        .map_err(|e| TracingError::InvalidFilter(e.to_string()))?;

    let span_events = if config.span_timings {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let json_layer = config.json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(span_events.clone())
    });
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(span_events)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}
