//! HTTP Headers Utility
//!
//! Builds the header set for a metrics submission.

use crate::error::SubmitError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add the authorization header with the token exactly as given (no scheme prefix).
    pub fn with_raw_auth(mut self, token: &str) -> Result<Self, SubmitError> {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            SubmitError::InvalidRequest(format!("Invalid authorization token: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add a per-request header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, SubmitError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            SubmitError::InvalidRequest(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                SubmitError::InvalidRequest(format!("Invalid value for header '{name}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add configured headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, SubmitError> {
        for (key, value) in custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                SubmitError::Configuration(format!("Invalid header name '{key}': {e}"))
            })?;
            self.headers.insert(
                header_name,
                HeaderValue::from_str(value).map_err(|e| {
                    SubmitError::Configuration(format!("Invalid header value '{value}': {e}"))
                })?,
            );
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
