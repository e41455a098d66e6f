//! Default Configuration Values
//!
//! Base URLs, endpoint paths and HTTP defaults used by the TRACE metrics client.

/// TRACE endpoint defaults
pub mod endpoints {
    /// Host A, serving the evidently and deepeval routes.
    pub const API_BASE_URL: &str = "https://api.cognitiveview.com";

    /// Host B, serving the opik route and the generic route.
    pub const APP_BASE_URL: &str = "https://app.cognitiveview.com";

    pub const EVIDENTLY_PATH: &str = "/cv/v1/metrics";
    pub const DEEPEVAL_PATH: &str = "/metrics";
    pub const OPIK_PATH: &str = "/api/cv/v1/metrics";

    /// Route used for provider names outside the built-in set.
    pub const GENERIC_PATH: &str = "/api/cv/v1/metrics";
}

/// HTTP client default configurations
pub mod http {
    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("trace-metrics/", env!("CARGO_PKG_VERSION"));

    /// Header carrying the submitting user for the evidently route.
    pub const USER_ID_HEADER: &str = "x-user-id";
}

/// Environment variables read by `ClientConfig::from_env`.
pub mod env {
    pub const API_BASE_URL: &str = "TRACE_API_BASE_URL";
    pub const APP_BASE_URL: &str = "TRACE_APP_BASE_URL";
}
