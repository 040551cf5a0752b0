use crate::config::toml_config::RouteConfig;
use crate::domain::model::{Credential, Identity};
use crate::domain::ports::IdentityClient;
use crate::utils::error::{Result, RouteError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, COOKIE, PRAGMA};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IdentityResponse {
    user: Option<Identity>,
}

/// Identity client that forwards the auth cookie to the backend's `/me`-style endpoint.
#[derive(Debug, Clone)]
pub struct HttpIdentityClient {
    client: Client,
    endpoint: String,
    cookie_name: String,
}

impl HttpIdentityClient {
    pub fn new(endpoint: impl Into<String>, cookie_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(config: &RouteConfig) -> Result<Self> {
        let endpoint = config.identity_endpoint()?;
        crate::utils::validation::validate_url("auth.identity_endpoint", endpoint)?;
        Ok(Self::new(endpoint, config.auth.cookie_name.clone()))
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity> {
        tracing::debug!("Requesting identity from: {}", self.endpoint);

        let mut request = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache");
        if let Some(token) = credential.value() {
            request = request.header(COOKIE, format!("{}={}", self.cookie_name, token));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Identity response status: {}", status);

        if !status.is_success() {
            return Err(RouteError::IdentityStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let payload: IdentityResponse = serde_json::from_str(&body)?;
        payload.user.ok_or_else(|| RouteError::MalformedIdentityError {
            message: "response has no user object".to_string(),
        })
    }
}
