//! # trace-metrics
//!
//! Client library that relays evaluation-metric results from third-party evaluation
//! providers (evidently, deepeval, opik) to the TRACE metrics API.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Table-driven providers**: one submit operation; each provider is a routing
//!   profile (host, path, payload key, user-id header) that can be overridden.
//! - **Typed failures**: HTTP rejections and transport/parse failures are distinct
//!   `SubmitError` variants carrying the status and raw response text.
//! - **Injected configuration**: base URLs and HTTP settings come from `ClientConfig`,
//!   so every route can be pointed at a mock server.
//! - **Single attempt**: no retries, no background work.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trace_metrics::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MetricsClient::new(ClientConfig::default())?;
//!
//!     let metrics = MetricSet::new()
//!         .with_metric("answer_relevancy", 0.95)
//!         .with_metric("faithfulness", 0.92);
//!     let metadata = SubmissionMetadata::new("chat-application", "1.0.0", "transportation")
//!         .with_url("https://api.example.com/chat");
//!     let credentials = Credentials::new("your-authorization-token");
//!
//!     match client
//!         .submit(&metrics, &credentials, &metadata, Provider::Deepeval)
//!         .await
//!     {
//!         Ok(body) => println!("accepted: {body}"),
//!         Err(SubmitError::Http { status, body }) => eprintln!("rejected ({status}): {body}"),
//!         Err(err) => eprintln!("failed: {err}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod blocking;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod types;

pub use client::MetricsClient;
pub use config::ClientConfig;
pub use error::{ErrorCategory, SubmitError};
pub use types::{
    Credentials, Host, HttpConfig, MetricSet, Provider, ProviderProfile, SubmissionMetadata,
};

/// Result of one submission: the parsed response body or the failure.
pub type SubmissionResult = Result<serde_json::Value, SubmitError>;

/// Commonly used types.
pub mod prelude {
    pub use crate::client::MetricsClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{ErrorCategory, SubmitError};
    pub use crate::execution::http::{HttpTransport, HttpTransportRequest, HttpTransportResponse};
    pub use crate::types::{
        Credentials, Host, HttpConfig, MetricSet, Provider, ProviderProfile, SubmissionMetadata,
    };
    pub use crate::SubmissionResult;
}
