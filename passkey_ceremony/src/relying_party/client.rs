use std::time::Duration;

use serde_json::{Value, json};
use url::Url;

use crate::config::API_BASE_URL;

use super::errors::RelyingPartyError;
use super::types::ApiResponse;

/// Creates an HTTP client for relying-party requests.
///
/// - `timeout`: 30 seconds, so a hung server cannot stall a ceremony
///   indefinitely beyond the authenticator's own limits.
/// - `pool_idle_timeout` / `pool_max_idle_per_host`: defaults sized for the
///   two requests a ceremony issues back to back.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}

/// HTTP access to the relying party's ceremony endpoints.
///
/// Translates ceremony intents into requests against one configured base URL
/// and normalizes every answer into an [`ApiResponse`]. Stateless between
/// calls: no retries, no caching. A failed request is reported upward once
/// and never reissued.
#[derive(Debug, Clone)]
pub struct RelyingPartyClient {
    base_url: String,
}

impl RelyingPartyClient {
    /// Client against an explicit base URL. A trailing slash is trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RelyingPartyError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| RelyingPartyError::BaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against the environment-resolved base URL.
    pub fn from_env() -> Result<Self, RelyingPartyError> {
        Self::new(API_BASE_URL.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/auth/register/begin?username=<enc>` - asks the relying
    /// party for credential-creation options.
    pub async fn begin_registration(
        &self,
        username: &str,
    ) -> Result<ApiResponse, RelyingPartyError> {
        let url = self.registration_url("begin", username);
        tracing::debug!("Registration begin: POST {}", url);
        self.post_empty(&url).await
    }

    /// `POST /api/auth/register/finish?username=<enc>` - submits the
    /// attestation credential for verification and storage.
    pub async fn finish_registration(
        &self,
        username: &str,
        credential: &Value,
    ) -> Result<ApiResponse, RelyingPartyError> {
        let url = self.registration_url("finish", username);
        tracing::debug!("Registration finish: POST {}", url);
        self.post_json(&url, credential).await
    }

    /// `POST /api/auth/login/begin` - asks the relying party for
    /// credential-request options.
    pub async fn begin_login(&self) -> Result<ApiResponse, RelyingPartyError> {
        let url = format!("{}/api/auth/login/begin", self.base_url);
        tracing::debug!("Login begin: POST {}", url);
        self.post_empty(&url).await
    }

    /// `POST /api/auth/login/finish` - submits the assertion for signature
    /// verification.
    pub async fn finish_login(&self, assertion: &Value) -> Result<ApiResponse, RelyingPartyError> {
        let url = format!("{}/api/auth/login/finish", self.base_url);
        tracing::debug!("Login finish: POST {}", url);
        self.post_json(&url, assertion).await
    }

    /// `POST /api/login` - password sign-in fallback.
    pub async fn password_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse, RelyingPartyError> {
        let url = format!("{}/api/login", self.base_url);
        tracing::debug!("Password login: POST {}", url);
        self.post_json(&url, &json!({ "email": email, "password": password }))
            .await
    }

    /// Whether the relying party answers its health probe with 2xx.
    pub async fn health(&self) -> Result<bool, RelyingPartyError> {
        let url = format!("{}/api/health", self.base_url);
        let response = get_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| RelyingPartyError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }

    // Both registration requests go through this so the username is
    // percent-encoded identically in begin and finish.
    fn registration_url(&self, step: &str, username: &str) -> String {
        format!(
            "{}/api/auth/register/{}?username={}",
            self.base_url,
            step,
            urlencoding::encode(username)
        )
    }

    async fn post_empty(&self, url: &str) -> Result<ApiResponse, RelyingPartyError> {
        let response = get_client()
            .post(url)
            .send()
            .await
            .map_err(|e| RelyingPartyError::Network(e.to_string()))?;

        Self::normalize(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<ApiResponse, RelyingPartyError> {
        let response = get_client()
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| RelyingPartyError::Network(e.to_string()))?;

        Self::normalize(response).await
    }

    async fn normalize(response: reqwest::Response) -> Result<ApiResponse, RelyingPartyError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelyingPartyError::Body(e.to_string()))?;

        tracing::debug!("Relying party answered {} ({} bytes)", status, body.len());
        Ok(ApiResponse::new(status, body))
    }
}
