use std::time::Duration;

use url::Url;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://dialpad.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed settings handed to the client at construction; read-only afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin (and optional prefix) that operation paths are appended to.
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
    /// Sent with every request in addition to credentials.
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("dialpad-rs/{}", env!("CARGO_PKG_VERSION")),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url.trim())?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_dialpad() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url.as_str(), "https://dialpad.com/");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.user_agent.starts_with("dialpad-rs/"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
    }
}
