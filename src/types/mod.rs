//! Core data types shared by the async and blocking clients.

pub mod credentials;
pub mod http;
pub mod metadata;
pub mod metrics;
pub mod provider;

pub use credentials::Credentials;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use metadata::SubmissionMetadata;
pub use metrics::MetricSet;
pub use provider::{Host, Provider, ProviderProfile};
