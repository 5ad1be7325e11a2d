//! Dashboard authentication service
//!
//! The dashboard is protected by one shared password. A successful login
//! yields a short-lived bearer token.

use tracing::{info, instrument, warn};
use validator::Validate;

use wedding_common::auth::{verify_password, DashboardClaims};
use wedding_common::AppError;

use crate::dto::{DashboardLoginRequest, DashboardTokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Dashboard authentication service
pub struct DashboardAuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardAuthService<'a> {
    /// Create a new DashboardAuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange the dashboard password for a session token
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: DashboardLoginRequest) -> ServiceResult<DashboardTokenResponse> {
        request.validate()?;

        let valid = verify_password(&request.password, self.ctx.dashboard_password_hash())
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !valid {
            warn!("Dashboard login failed");
            return Err(AppError::InvalidCredentials.into());
        }

        let token = self.ctx.jwt_service().issue_dashboard_token()?;

        info!(expires_in = token.expires_in, "Dashboard session started");

        Ok(token.into())
    }

    /// Check a bearer token presented to a dashboard route
    pub fn authenticate(&self, token: &str) -> ServiceResult<DashboardClaims> {
        Ok(self.ctx.jwt_service().validate_dashboard_token(token)?)
    }
}
