//! Fetch-with-token — the single point of entry for all remote API calls
//! in the client. Every call attaches a bearer token for the operation's
//! required scopes, and every failure is normalized into [`FetchError`]
//! before it leaves this module; no transport or provider error types
//! cross the boundary.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::auth::{Scope, TokenAcquirer};
use crate::config::ClientConfig;

pub mod endpoints;

pub use endpoints::Endpoint;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Normalized failure channel for remote calls.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Token acquisition was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport error, non-2xx status, or malformed response body.
    #[error("request failed: {0}")]
    Request(String),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Fetches and deserializes a JSON response from `endpoint`, attaching
    /// a bearer token for `scopes` and the given query parameters.
    pub async fn fetch_with_token<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        tokens: &dyn TokenAcquirer,
        scopes: &[Scope],
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self.send(endpoint, tokens, scopes, query, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Request(format!("malformed response body: {e}")))
    }

    /// Issues a mutating call with an optional JSON body, discarding any
    /// response payload.
    pub async fn send_with_token(
        &self,
        endpoint: Endpoint,
        tokens: &dyn TokenAcquirer,
        scopes: &[Scope],
        body: Option<serde_json::Value>,
    ) -> Result<(), FetchError> {
        self.send(endpoint, tokens, scopes, &[], body).await?;
        Ok(())
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        tokens: &dyn TokenAcquirer,
        scopes: &[Scope],
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, FetchError> {
        let token = tokens
            .acquire_token(scopes)
            .await
            .map_err(|e| FetchError::Auth(e.to_string()))?;

        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.path
        );

        debug!(method = %endpoint.method, %url, "remote API call");

        let mut request = self
            .http
            .request(endpoint.method, url)
            .bearer_auth(token)
            .query(query);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("transport error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Request(format!(
                "server returned {status}"
            )));
        }

        Ok(response)
    }
}
