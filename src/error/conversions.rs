//! Type Conversions for SubmitError
//!
//! This module contains From trait implementations for converting
//! common error types into SubmitError.

use super::types::SubmitError;

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::transport(message)
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("invalid JSON response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SubmitError = json_err.into();
        assert!(err.is_transport());
        assert!(err.to_string().contains("invalid JSON response"));
    }
}
