//! JWT session tokens for the dashboard
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Subject carried by every dashboard token
pub const DASHBOARD_SUBJECT: &str = "dashboard";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardClaims {
    /// Subject (always `dashboard`)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl DashboardClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issued dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding dashboard tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, session_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_ttl,
        }
    }

    /// Issue a dashboard session token
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_dashboard_token(&self) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let claims = DashboardClaims {
            sub: DASHBOARD_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.session_ttl)).timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(SessionToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.session_ttl,
        })
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<DashboardClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<DashboardClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate a dashboard token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not a dashboard token
    pub fn validate_dashboard_token(&self, token: &str) -> Result<DashboardClaims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.sub != DASHBOARD_SUBJECT {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("session_ttl", &self.session_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_dashboard_token() {
        let service = create_test_service();
        let token = service.issue_dashboard_token().unwrap();

        assert!(!token.access_token.is_empty());
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn test_validate_dashboard_token() {
        let service = create_test_service();
        let token = service.issue_dashboard_token().unwrap();

        let claims = service.validate_dashboard_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, DASHBOARD_SUBJECT);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = JwtService::new("another-secret-key-entirely", 3600)
            .issue_dashboard_token()
            .unwrap();

        let result = create_test_service().validate_dashboard_token(&token.access_token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_subject_rejected() {
        let service = create_test_service();
        let claims = DashboardClaims {
            sub: "someone-else".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 60,
        };
        let token = encode(&Header::default(), &claims, &service.encoding_key).unwrap();

        assert!(service.decode_token(&token).is_ok());
        assert!(matches!(
            service.validate_dashboard_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let claims = DashboardClaims {
            sub: DASHBOARD_SUBJECT.to_string(),
            iat: 0,
            exp: 1,
        };
        let token = encode(&Header::default(), &claims, &service.encoding_key).unwrap();

        assert!(matches!(
            service.validate_dashboard_token(&token),
            Err(AppError::TokenExpired)
        ));
    }
}
