//! Outcome records produced by one topic submission attempt.

use serde_json::Value;

use super::ErrorKind;

/// Message reported for every successfully created page.
pub const PAGE_CREATED_MESSAGE: &str = "Page created successfully!";

/// Page details returned by the document database after a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    /// Upstream status code (200 or 201).
    pub status_code: u16,
    /// Identifier of the created page, when the response carried one.
    pub page_id: Option<String>,
    /// Public URL of the created page, when the response carried one.
    pub url: Option<String>,
}

/// Classified failure of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFailure {
    status_code: u16,
    kind: ErrorKind,
    message: String,
    details: Option<Value>,
}

impl SubmissionFailure {
    /// The document database answered with an unsuccessful status.
    ///
    /// `details` carries the decoded response body when it was valid JSON.
    pub fn rejected(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            kind: ErrorKind::for_remote_status(status_code),
            message: format!("Failed to create page: {body}"),
            details: serde_json::from_str(body).ok(),
        }
    }

    /// The document database could not be reached.
    pub fn network(description: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            kind: ErrorKind::Network,
            message: format!("Network error occurred: {description}"),
            details: None,
        }
    }

    /// Any other failure while building or performing the call.
    pub fn unexpected(description: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            kind: ErrorKind::Unexpected,
            message: format!("Unexpected error occurred: {description}"),
            details: None,
        }
    }

    /// Status code driving the inbound HTTP mapping.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Machine-readable classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description including the upstream cause.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Decoded upstream error body, if any.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

/// Result of one submission attempt.
///
/// Every failure is folded into [`SubmissionResult::Failed`]; callers perform
/// case analysis on the variant instead of catching errors.
///
/// # Examples
/// ```
/// use topic_gateway::domain::{CreatedPage, SubmissionResult};
///
/// let result = SubmissionResult::Created(CreatedPage {
///     status_code: 201,
///     page_id: Some("abc123".into()),
///     url: Some("https://notion.so/abc123".into()),
/// });
/// assert!(result.is_success());
/// assert_eq!(result.message(), "Page created successfully!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The page was created.
    Created(CreatedPage),
    /// The submission failed and was classified.
    Failed(SubmissionFailure),
}

impl SubmissionResult {
    /// Whether the page was created.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Human-readable outcome message.
    pub fn message(&self) -> &str {
        match self {
            Self::Created(_) => PAGE_CREATED_MESSAGE,
            Self::Failed(failure) => failure.message(),
        }
    }

    /// Upstream status code, or 500 for failures that never got a response.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Created(page) => page.status_code,
            Self::Failed(failure) => failure.status_code(),
        }
    }

    /// Identifier of the created page.
    pub fn page_id(&self) -> Option<&str> {
        match self {
            Self::Created(page) => page.page_id.as_deref(),
            Self::Failed(_) => None,
        }
    }

    /// URL of the created page.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created(page) => page.url.as_deref(),
            Self::Failed(_) => None,
        }
    }

    /// Failure classification; `None` on success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Created(_) => None,
            Self::Failed(failure) => Some(failure.kind()),
        }
    }
}
