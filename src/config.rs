//! Client configuration.
//!
//! Base URLs and the per-provider routing table are injected here instead of being
//! baked into each call, so tests can point every route at a mock server and
//! deployments can move a provider to another host without code changes.

use crate::defaults;
use crate::types::{Host, HttpConfig, Provider, ProviderProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for `Host::Api` routes.
    pub api_base_url: String,
    /// Base URL for `Host::App` routes.
    pub app_base_url: String,
    pub http_config: HttpConfig,
    /// Overrides for the built-in provider profiles.
    #[serde(default)]
    pub profiles: HashMap<Provider, ProviderProfile>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::endpoints::API_BASE_URL.to_string(),
            app_base_url: defaults::endpoints::APP_BASE_URL.to_string(),
            http_config: HttpConfig::default(),
            profiles: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with base URLs taken from `TRACE_API_BASE_URL` and
    /// `TRACE_APP_BASE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(defaults::env::API_BASE_URL) {
            config.api_base_url = url;
        }
        if let Some(url) = non_empty_env(defaults::env::APP_BASE_URL) {
            config.app_base_url = url;
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = url.into();
        self
    }

    /// Serve both hosts from one base URL.
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_api_base_url(url.clone()).with_app_base_url(url)
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    pub fn with_profile(mut self, provider: Provider, profile: ProviderProfile) -> Self {
        self.profiles.insert(provider, profile);
        self
    }

    /// Effective routing profile for a provider.
    pub fn profile(&self, provider: Provider) -> ProviderProfile {
        self.profiles
            .get(&provider)
            .cloned()
            .unwrap_or_else(|| provider.default_profile())
    }

    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Api => &self.api_base_url,
            Host::App => &self.app_base_url,
        }
    }

    /// Full endpoint URL for a profile.
    pub fn endpoint(&self, profile: &ProviderProfile) -> String {
        join_url(self.base_url(profile.host), &profile.path)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Join a base URL and a path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
