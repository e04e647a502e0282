//! Authentication material for outbound requests.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{DialpadError, Result};

/// Environment variable holding the Dialpad API key.
pub const API_KEY_ENV: &str = "DIALPAD_API_KEY";

/// Supplies auth material for a request. The client never sees where it comes from.
pub trait Credentials: Send + Sync {
    fn apply(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// Dialpad API key, sent as a bearer token.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(DialpadError::Credentials("API key is empty".to_string()));
        }
        Ok(Self(key))
    }

    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| DialpadError::Credentials(format!("{API_KEY_ENV} is not set")))?;
        Self::new(key)
    }

    /// First eight characters followed by an ellipsis, for display.
    pub fn masked(&self) -> String {
        if self.0.chars().count() > 8 {
            format!("{}...", self.0.chars().take(8).collect::<String>())
        } else {
            "...".to_string()
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl Credentials for ApiKey {
    fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|_| DialpadError::Credentials("API key contains invalid characters".to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Sends requests without an Authorization header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl Credentials for NoCredentials {
    fn apply(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_sets_bearer_header() {
        let key = ApiKey::new("  secret-token-value ").unwrap();
        let mut headers = HeaderMap::new();
        key.apply(&mut headers).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret-token-value");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(ApiKey::new("   "), Err(DialpadError::Credentials(_))));
    }

    #[test]
    fn debug_output_is_masked() {
        let key = ApiKey::new("abcdefghijklmnop").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(\"abcdefgh...\")");
    }
}
