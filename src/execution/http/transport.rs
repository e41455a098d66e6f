//! HTTP transport abstraction.
//!
//! `MetricsClient` never talks to `reqwest` directly; it hands a fully assembled
//! request to an `HttpTransport`. The default implementation is `ReqwestTransport`.
//! Tests and embedders can inject their own transport to observe the final
//! URL/headers/body or to simulate network failures.

use crate::error::SubmitError;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    /// Provider name the request was built for.
    pub provider: String,
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Custom HTTP transport for JSON requests.
///
/// Implementations perform exactly one attempt and report failures to complete the
/// exchange as `SubmitError::Transport`. Non-2xx responses are not errors at this
/// layer; they are returned as responses and classified by the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, SubmitError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, SubmitError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, SubmitError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            SubmitError::transport(format!("failed to read response body (status {status}): {e}"))
        })?;

        Ok(HttpTransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Build an HTTP client from HttpConfig.
///
/// Custom headers are not installed as client defaults; they are merged per request
/// so protocol headers can take precedence.
pub fn build_http_client(cfg: &HttpConfig) -> Result<reqwest::Client, SubmitError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &cfg.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| SubmitError::Configuration(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &cfg.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder
        .build()
        .map_err(|e| SubmitError::Configuration(format!("Failed to build HTTP client: {e}")))
}
