//! Evaluation providers and their routing profiles.
//!
//! Each provider maps to exactly one `ProviderProfile`: which host to call, which
//! path, which key names the provider inside `metric_metadata`, and whether the
//! `X-User-Id` header is sent. The defaults mirror the routes the TRACE service
//! exposes today; `ClientConfig::with_profile` replaces any of them.

use crate::defaults::endpoints;
use crate::error::SubmitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Evaluation tool whose metric scores are relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Evidently,
    Deepeval,
    Opik,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Evidently, Provider::Deepeval, Provider::Opik];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Evidently => "evidently",
            Provider::Deepeval => "deepeval",
            Provider::Opik => "opik",
        }
    }

    pub fn default_profile(&self) -> ProviderProfile {
        match self {
            Provider::Evidently => ProviderProfile {
                name: self.as_str().to_string(),
                host: Host::Api,
                path: endpoints::EVIDENTLY_PATH.to_string(),
                metadata_key: "provider".to_string(),
                user_id_header: true,
                include_url: true,
            },
            Provider::Deepeval => ProviderProfile {
                name: self.as_str().to_string(),
                host: Host::Api,
                path: endpoints::DEEPEVAL_PATH.to_string(),
                metadata_key: "eval_provider".to_string(),
                user_id_header: false,
                include_url: true,
            },
            Provider::Opik => ProviderProfile {
                name: self.as_str().to_string(),
                host: Host::App,
                path: endpoints::OPIK_PATH.to_string(),
                metadata_key: "eval_provider".to_string(),
                user_id_header: false,
                include_url: true,
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evidently" => Ok(Provider::Evidently),
            "deepeval" => Ok(Provider::Deepeval),
            "opik" => Ok(Provider::Opik),
            other => Err(SubmitError::InvalidRequest(format!(
                "unknown provider '{other}'"
            ))),
        }
    }
}

/// Which configured base URL a route is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Host {
    /// `api.` host (evidently, deepeval).
    Api,
    /// `app.` host (opik, generic route).
    App,
}

/// One row of the routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Value written under the metadata key and used as the `metric_data` key.
    pub name: String,
    pub host: Host,
    pub path: String,
    /// Key naming the provider inside `metric_metadata`.
    pub metadata_key: String,
    /// Send `X-User-Id`; makes `Credentials::user_id` mandatory.
    pub user_id_header: bool,
    /// Emit `metric_metadata.url` when the metadata carries one.
    pub include_url: bool,
}

impl ProviderProfile {
    /// Generic TRACE route for an arbitrary provider name.
    pub fn generic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: Host::App,
            path: endpoints::GENERIC_PATH.to_string(),
            metadata_key: "eval_provider".to_string(),
            user_id_header: false,
            include_url: true,
        }
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_metadata_key(mut self, key: impl Into<String>) -> Self {
        self.metadata_key = key.into();
        self
    }

    pub fn with_user_id_header(mut self, enabled: bool) -> Self {
        self.user_id_header = enabled;
        self
    }

    pub fn with_include_url(mut self, enabled: bool) -> Self {
        self.include_url = enabled;
        self
    }
}
