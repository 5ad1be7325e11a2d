//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wedding_api::{create_app, create_app_state};
use wedding_common::{
    hash_password, AppConfig, AppSettings, CorsConfig, DashboardConfig, DatabaseConfig,
    Environment, HttpRateLimitConfig, JwtConfig, RetryConfig, ServerConfig,
    SubmissionLimitConfig,
};

/// Dashboard password every test server accepts
pub const DASHBOARD_PASSWORD: &str = "test-password";

/// Header carrying the guest's ownership token
pub const GUEST_TOKEN_HEADER: &str = "X-Guest-Token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on the in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with a dashboard token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(with_bearer(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a POST request as a guest holding `guest_token`
    pub async fn post_as_guest<T: Serialize>(
        &self,
        path: &str,
        guest_token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(GUEST_TOKEN_HEADER, guest_token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Make a DELETE request as a guest holding `guest_token`
    pub async fn delete_as_guest(&self, path: &str, guest_token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header(GUEST_TOKEN_HEADER, guest_token)
            .send()
            .await?)
    }

    /// Make a DELETE request with a dashboard token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(with_bearer(self.client.delete(self.url(path)), token).send().await?)
    }

    /// Log in to the dashboard and return the bearer token
    pub async fn dashboard_token(&self) -> Result<String> {
        let response = self
            .post(
                "/api/v1/dashboard/login",
                &serde_json::json!({ "password": DASHBOARD_PASSWORD }),
            )
            .await?;
        let body: serde_json::Value = assert_json(response, StatusCode::OK).await?;

        body["access_token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("login response has no access_token: {body}"))
    }
}

fn with_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {}", token))
}

/// Create a test configuration
///
/// Uses the in-memory store unless `TEST_DATABASE_URL` is set. The RSVP
/// submission gate is raised so ordinary tests never trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "memory://".to_string());

    Ok(AppConfig {
        app: AppSettings {
            name: "wedding-rsvp-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
        },
        dashboard: DashboardConfig {
            password_hash: hash_password(DASHBOARD_PASSWORD)?,
            session_ttl: 3600,
        },
        submission_limit: SubmissionLimitConfig {
            window_ms: 1000,
            max_requests: 1000,
        },
        http_rate_limit: HttpRateLimitConfig {
            requests_per_second: 10_000,
            burst: 10_000,
        },
        retry: RetryConfig {
            max_attempts: 3,
            base_delay_ms: 10,
            backoff_multiplier: 2.0,
            max_delay_ms: 50,
        },
        cors: CorsConfig::default(),
    })
}

/// Whether the tests run against PostgreSQL rather than the in-memory store
pub fn uses_postgres() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("error body has no code: {body}"))
}
