//! Caller credentials.

use secrecy::{ExposeSecret, SecretString};

/// Authorization material for one submission.
///
/// The token is sent as the raw `Authorization` header value. Whatever scheme the
/// caller needs (`Bearer ...`, a bare API key, a subscription key) must already be
/// part of the string.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: SecretString,
    user_id: Option<String>,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            user_id: None,
        }
    }

    /// User identifier, required by routes that send `X-User-Id`.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_token() {
        let creds = Credentials::new("super-secret-token").with_user_id("user-42");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("user-42"));
    }

    #[test]
    fn token_is_passed_through_unmodified() {
        let creds = Credentials::new("Bearer abc.def");
        assert_eq!(creds.token(), "Bearer abc.def");
        assert_eq!(creds.user_id(), None);
    }
}
