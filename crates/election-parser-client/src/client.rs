//! HTTP client for the parse-and-format backend.
//!
//! Wraps `reqwest` with a fixed JSON request shape and sorts failures into
//! unreachable / error-status / other so the form can word them for the user.

use std::future::Future;
use std::time::Duration;

use election_parser_core::{
    normalize_api_path, AppConfig, ParsePayload, ParseTransport, TransportError,
};
use reqwest::{header, Client, Url};

use crate::error::ClientError;

/// Client for `POST <base>/parse-and-format`.
///
/// Use [`ParseClient::from_config`] in the binaries or
/// [`ParseClient::with_base_url`] to point at a mock server in tests.
pub struct ParseClient {
    client: Client,
    base_url: String,
    endpoint: Url,
}

impl ParseClient {
    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            config.api_url.as_str(),
            &config.api_path,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Builds a client against `base_url` + `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// joined endpoint is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        path: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        let endpoint = Self::build_endpoint(&base_url, path)?;

        Ok(Self {
            client,
            base_url,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts the payload once and returns the response body on 2xx.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on connect failure or timeout.
    /// - [`ClientError::Status`] on any non-2xx status, with the body (or the
    ///   reason phrase when the body is empty).
    /// - [`ClientError::Http`] for any other transport failure.
    pub async fn submit(&self, payload: &ParsePayload) -> Result<String, ClientError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            body = %serde_json::to_string(payload).unwrap_or_default(),
            "posting parse request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %e,
                        "failed to read error body"
                    );
                    String::new()
                }
            };
            let body = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_owned()
            } else {
                body
            };
            tracing::warn!(status = status.as_u16(), body = %body, "backend returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        tracing::debug!(bytes = body.len(), "backend responded");
        Ok(body)
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_connect() || error.is_timeout() {
            tracing::warn!(base_url = %self.base_url, error = %error, "backend unreachable");
            ClientError::Unreachable {
                base_url: self.base_url.clone(),
                source: error,
            }
        } else {
            tracing::error!(error = %error, "parse request failed");
            ClientError::Http(error)
        }
    }

    fn build_endpoint(base_url: &str, path: &str) -> Result<Url, ClientError> {
        let joined = format!("{base_url}{}", normalize_api_path(path));
        Url::parse(&joined).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
    }
}

impl ParseTransport for ParseClient {
    fn parse_and_format(
        &self,
        payload: &ParsePayload,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        async move { self.submit(payload).await.map_err(TransportError::from) }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
