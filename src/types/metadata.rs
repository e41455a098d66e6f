//! Submission metadata.

use serde::{Deserialize, Serialize};

/// Descriptive fields about the submitting application.
///
/// Values are sent verbatim; nothing here is validated (`version` is not required
/// to be semver, `url` is not parsed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub application_name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short domain label, e.g. "finance" or "transportation".
    pub use_case: String,
}

impl SubmissionMetadata {
    pub fn new(
        application_name: impl Into<String>,
        version: impl Into<String>,
        use_case: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            version: version.into(),
            url: None,
            use_case: use_case.into(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
