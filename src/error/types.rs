//! Core error types.

use thiserror::Error;

/// Failure of a single metric submission.
///
/// `Http` and `Transport` are the two outcomes of a network attempt that did not
/// produce a usable response. `InvalidRequest` and `Configuration` are raised before
/// any request leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status code.
    #[error("HTTP error {status}: {body}")]
    Http {
        status: u16,
        /// Raw response body, never parsed.
        body: String,
    },

    /// The request could not be completed, or a success response was not valid JSON.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        /// Raw response text when a response was received.
        body: Option<String>,
    },

    /// Credentials or routing inputs rejected before sending.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification used for branching and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Client,
    Server,
    Network,
    Parsing,
    Validation,
    Configuration,
}

impl SubmitError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            body: None,
        }
    }

    /// Attach the raw response text to a transport error.
    pub fn with_body(self, text: impl Into<String>) -> Self {
        match self {
            Self::Transport { message, .. } => Self::Transport {
                message,
                body: Some(text.into()),
            },
            other => other,
        }
    }

    /// HTTP status for `Http` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response text, if a response was received.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            Self::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http { status, .. } => match *status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            // A transport error carrying a body means the server answered but the
            // payload was not JSON.
            Self::Transport { body: Some(_), .. } => ErrorCategory::Parsing,
            Self::Transport { body: None, .. } => ErrorCategory::Network,
            Self::InvalidRequest(_) => ErrorCategory::Validation,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status_and_body() {
        let err = SubmitError::http(401, "{\"detail\":\"bad token\"}");
        assert!(err.is_http());
        assert!(!err.is_transport());
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.response_body(), Some("{\"detail\":\"bad token\"}"));
        assert_eq!(err.category(), ErrorCategory::Authentication);
    }

    #[test]
    fn categories_follow_status_ranges() {
        assert_eq!(SubmitError::http(429, "").category(), ErrorCategory::RateLimit);
        assert_eq!(SubmitError::http(404, "").category(), ErrorCategory::Client);
        assert_eq!(SubmitError::http(503, "").category(), ErrorCategory::Server);
    }

    #[test]
    fn transport_error_body_is_optional() {
        let err = SubmitError::transport("connection reset by peer");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.response_body(), None);
        assert_eq!(err.category(), ErrorCategory::Network);

        let err = err.with_body("<html>gateway</html>");
        assert_eq!(err.response_body(), Some("<html>gateway</html>"));
        assert_eq!(err.category(), ErrorCategory::Parsing);
    }

    #[test]
    fn with_body_leaves_other_variants_untouched() {
        let err = SubmitError::InvalidRequest("missing user id".into()).with_body("ignored");
        assert_eq!(err, SubmitError::InvalidRequest("missing user id".into()));
    }

    #[test]
    fn display_includes_status() {
        let err = SubmitError::http(500, "boom");
        assert_eq!(err.to_string(), "HTTP error 500: boom");
    }
}
