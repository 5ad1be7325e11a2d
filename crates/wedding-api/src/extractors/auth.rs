//! Authentication extractors
//!
//! Dashboard routes take a bearer token from the Authorization header. Guest
//! wall ownership uses a client-generated token in `X-Guest-Token`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use wedding_common::DashboardClaims;
use wedding_service::DashboardAuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the guest's browser token
pub const GUEST_TOKEN_HEADER: &str = "x-guest-token";

/// Longest guest token accepted
const MAX_GUEST_TOKEN_LENGTH: usize = 128;

/// Caller holding a valid dashboard session
#[derive(Debug, Clone)]
pub struct DashboardAuth {
    pub claims: DashboardClaims,
}

#[async_trait]
impl<S> FromRequestParts<S> for DashboardAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = DashboardAuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid dashboard token");
                ApiError::InvalidAuth
            })?;

        Ok(DashboardAuth { claims })
    }
}

/// Guest token, required
#[derive(Debug, Clone)]
pub struct GuestToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for GuestToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OptionalGuestToken(token) = OptionalGuestToken::from_request_parts(parts, state).await?;
        token.map(GuestToken).ok_or(ApiError::MissingGuestToken)
    }
}

/// Guest token, when the client sent one
///
/// A blank header counts as absent; an oversized one is rejected.
#[derive(Debug, Clone)]
pub struct OptionalGuestToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalGuestToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(GUEST_TOKEN_HEADER) else {
            return Ok(OptionalGuestToken(None));
        };

        let token = value
            .to_str()
            .map_err(|_| ApiError::InvalidGuestToken("must be ASCII"))?
            .trim();

        if token.len() > MAX_GUEST_TOKEN_LENGTH {
            return Err(ApiError::InvalidGuestToken("too long"));
        }

        Ok(OptionalGuestToken(
            (!token.is_empty()).then(|| token.to_string()),
        ))
    }
}
