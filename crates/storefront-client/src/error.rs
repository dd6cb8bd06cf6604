use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, timeout, or body-read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(
        "unexpected HTTP status {status} from {url}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    HttpStatus {
        status: u16,
        url: String,
        /// The backend's `message` field, when the error body carries one.
        message: Option<String>,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Cloneable summary of a [`ClientError`], kept in collection status and
/// used by tests to assert on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    HttpStatus(u16),
    Decode,
    InvalidBaseUrl,
}

impl ClientError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Network(_) => FailureKind::Network,
            ClientError::HttpStatus { status, .. } => FailureKind::HttpStatus(*status),
            ClientError::Decode { .. } => FailureKind::Decode,
            ClientError::InvalidBaseUrl { .. } => FailureKind::InvalidBaseUrl,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::HttpStatus(status) => write!(f, "http {status}"),
            FailureKind::Decode => write!(f, "decode"),
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
        }
    }
}
