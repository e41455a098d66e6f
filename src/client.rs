//! Async metrics client.

use crate::config::ClientConfig;
use crate::defaults;
use crate::error::SubmitError;
use crate::execution::http::{
    HttpHeaderBuilder, HttpTransport, HttpTransportRequest, ReqwestTransport,
};
use crate::execution::{build_payload, classify_response};
use crate::types::{Credentials, MetricSet, Provider, ProviderProfile, SubmissionMetadata};
use serde_json::Value;
use std::sync::Arc;

/// Relays metric results to the TRACE metrics API.
///
/// Every submission is a single POST with no retries. The client is cheap to clone
/// and safe to share; calls do not affect each other.
#[derive(Clone)]
pub struct MetricsClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MetricsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MetricsClient {
    /// Create a client backed by `reqwest`, configured from `config.http_config`.
    pub fn new(config: ClientConfig) -> Result<Self, SubmitError> {
        let transport = ReqwestTransport::from_config(&config.http_config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends through a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit metrics for one of the built-in providers.
    pub async fn submit(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        provider: Provider,
    ) -> Result<Value, SubmitError> {
        let profile = self.config.profile(provider);
        self.submit_with_profile(metrics, credentials, metadata, &profile)
            .await
    }

    /// Submit metrics under an arbitrary provider name through the generic route.
    ///
    /// Every name, built-in tags included, goes to `/api/cv/v1/metrics` on the app
    /// host with the `eval_provider` key and no `X-User-Id`. Names are trimmed;
    /// built-in tags are normalized to lowercase.
    pub async fn submit_as(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        provider_name: &str,
    ) -> Result<Value, SubmitError> {
        let profile = generic_profile(provider_name)?;
        self.submit_with_profile(metrics, credentials, metadata, &profile)
            .await
    }

    /// Submit metrics using an explicit routing profile.
    pub async fn submit_with_profile(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        profile: &ProviderProfile,
    ) -> Result<Value, SubmitError> {
        let request = self.build_request_with_profile(metrics, credentials, metadata, profile)?;
        let provider = request.provider.clone();
        tracing::debug!(
            provider = %provider,
            url = %request.url,
            metric_count = metrics.len(),
            "Submitting metrics"
        );

        let response = match self.transport.execute_json(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(provider = %provider, error = %err, "Metric submission failed");
                return Err(err);
            }
        };
        tracing::debug!(provider = %provider, status = response.status, "Received response");

        let result = classify_response(&response);
        match &result {
            Err(SubmitError::Http { status, body }) => {
                tracing::warn!(
                    provider = %provider,
                    status = *status,
                    body_len = body.len(),
                    "Metrics API rejected submission"
                );
            }
            Err(err) => {
                tracing::warn!(provider = %provider, error = %err, "Metric submission failed");
            }
            Ok(_) => {}
        }
        result
    }

    /// Assemble the request for a built-in provider without sending it.
    pub fn build_request(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        provider: Provider,
    ) -> Result<HttpTransportRequest, SubmitError> {
        let profile = self.config.profile(provider);
        self.build_request_with_profile(metrics, credentials, metadata, &profile)
    }

    /// Assemble the request for a profile without sending it.
    pub fn build_request_with_profile(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        profile: &ProviderProfile,
    ) -> Result<HttpTransportRequest, SubmitError> {
        if credentials.token().is_empty() {
            return Err(SubmitError::InvalidRequest(
                "authorization token is empty".to_string(),
            ));
        }

        let mut builder = HttpHeaderBuilder::new()
            .with_custom_headers(&self.config.http_config.headers)?
            .with_raw_auth(credentials.token())?
            .with_json_content_type();

        if profile.user_id_header {
            let user_id = credentials
                .user_id()
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| {
                    SubmitError::InvalidRequest(format!(
                        "provider '{}' requires a user id",
                        profile.name
                    ))
                })?;
            builder = builder.with_header(defaults::http::USER_ID_HEADER, user_id)?;
        }

        Ok(HttpTransportRequest {
            provider: profile.name.clone(),
            url: self.config.endpoint(profile),
            headers: builder.build(),
            body: build_payload(profile, metrics, metadata),
        })
    }
}

/// Generic-route profile for a caller-supplied provider name.
fn generic_profile(provider_name: &str) -> Result<ProviderProfile, SubmitError> {
    let name = provider_name.trim();
    if name.is_empty() {
        return Err(SubmitError::InvalidRequest(
            "provider name is empty".to_string(),
        ));
    }
    Ok(match name.parse::<Provider>() {
        Ok(provider) => ProviderProfile::generic(provider.as_str()),
        Err(_) => ProviderProfile::generic(name),
    })
}
