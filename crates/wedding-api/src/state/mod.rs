//! State shared by every handler

use std::sync::Arc;

use wedding_common::AppConfig;
use wedding_service::ServiceContext;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    services: ServiceContext,
    config: AppConfig,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(Shared { services, config }),
        }
    }

    /// Repositories, clock, limiter and auth behind the services
    pub fn service_context(&self) -> &ServiceContext {
        &self.inner.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Whether CORS and logging should use their production settings
    pub fn is_production(&self) -> bool {
        self.inner.config.app.env.is_production()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.inner.services)
            .field("env", &self.inner.config.app.env)
            .finish()
    }
}
