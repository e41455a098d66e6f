//! Blocking metrics client.
//!
//! Wraps the async `MetricsClient` with a private current-thread runtime so plain
//! synchronous code can submit metrics. The calling thread blocks for the whole
//! round trip.
//!
//! Must not be used from inside an async runtime; call the async client there, or
//! move the blocking call onto `tokio::task::spawn_blocking`.

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::execution::http::HttpTransport;
use crate::types::{Credentials, MetricSet, Provider, ProviderProfile, SubmissionMetadata};
use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Debug)]
pub struct MetricsClient {
    inner: crate::client::MetricsClient,
    runtime: Runtime,
}

impl MetricsClient {
    pub fn new(config: ClientConfig) -> Result<Self, SubmitError> {
        let runtime = build_runtime()?;
        let inner = crate::client::MetricsClient::new(config)?;
        Ok(Self { inner, runtime })
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, SubmitError> {
        Ok(Self {
            inner: crate::client::MetricsClient::with_transport(config, transport),
            runtime: build_runtime()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn submit(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        provider: Provider,
    ) -> Result<Value, SubmitError> {
        self.runtime
            .block_on(self.inner.submit(metrics, credentials, metadata, provider))
    }

    pub fn submit_as(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        provider_name: &str,
    ) -> Result<Value, SubmitError> {
        self.runtime.block_on(
            self.inner
                .submit_as(metrics, credentials, metadata, provider_name),
        )
    }

    pub fn submit_with_profile(
        &self,
        metrics: &MetricSet,
        credentials: &Credentials,
        metadata: &SubmissionMetadata,
        profile: &ProviderProfile,
    ) -> Result<Value, SubmitError> {
        self.runtime.block_on(
            self.inner
                .submit_with_profile(metrics, credentials, metadata, profile),
        )
    }
}

fn build_runtime() -> Result<Runtime, SubmitError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SubmitError::Configuration(format!("Failed to start runtime: {e}")))
}
