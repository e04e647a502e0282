use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialpadError>;

/// Failure of a single operation call.
///
/// Nothing here is retried by the client; the caller decides.
#[derive(Debug, Error)]
pub enum DialpadError {
    /// A required parameter was not supplied. Raised before any network I/O.
    #[error("missing required parameter '{name}' for {operation}")]
    MissingParameter { operation: String, name: String },

    /// A supplied parameter is not declared by the operation or has an unusable value.
    #[error("invalid parameter '{name}' for {operation}: {reason}")]
    InvalidParameter {
        operation: String,
        name: String,
        reason: String,
    },

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("credentials unavailable: {0}")]
    Credentials(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The API answered with a status outside 2xx.
    #[error("Dialpad API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never completed (connect, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DialpadError {
    /// True for failures detected locally, before a request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DialpadError::MissingParameter { .. }
                | DialpadError::InvalidParameter { .. }
                | DialpadError::UnknownOperation(_)
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DialpadError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The API error body parsed as JSON, when it is JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            DialpadError::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}
