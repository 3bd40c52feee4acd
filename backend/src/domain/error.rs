//! Domain-level error classification.
//!
//! These kinds are transport agnostic. Inbound adapters expose them as the
//! `error_type` field of the error envelope; the HTTP status is derived from
//! the upstream status code rather than from the kind.

use serde::{Deserialize, Serialize};

/// Stable machine-readable classification of a failed topic submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The inbound topic was malformed; no outbound call was attempted.
    #[serde(rename = "ValidationError")]
    Validation,
    /// The document database rejected the payload (HTTP 400).
    BadRequest,
    /// The integration token was missing or invalid (HTTP 401).
    Unauthorized,
    /// The database does not exist or is not shared with the integration
    /// (HTTP 404).
    NotFound,
    /// The document database answered with any other unsuccessful status.
    #[serde(rename = "RemoteError")]
    Remote,
    /// The document database could not be reached.
    #[serde(rename = "NetworkError")]
    Network,
    /// Any other failure while building or performing the call.
    #[serde(rename = "UnexpectedError")]
    Unexpected,
}

impl ErrorKind {
    /// Classify an unsuccessful status code returned by the document database.
    ///
    /// # Examples
    /// ```
    /// use topic_gateway::domain::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::for_remote_status(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::for_remote_status(418), ErrorKind::Remote);
    /// ```
    pub fn for_remote_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Remote,
        }
    }

    /// Wire name used in the `error_type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "NotFound",
            Self::Remote => "RemoteError",
            Self::Network => "NetworkError",
            Self::Unexpected => "UnexpectedError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
