//! JSON envelopes shared by the HTTP endpoints.
//!
//! Every `POST /save_topic` response is either a [`SuccessResponse`] or an
//! [`ErrorResponse`]; clients branch on the `success` flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{CreatedPage, ErrorKind, PAGE_CREATED_MESSAGE};

/// Topic submission request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[schema(example = json!({
    "name": "Python Basics",
    "content": "Python is a high-level programming language known for its simplicity and readability."
}))]
pub struct TopicRequest {
    /// Page title.
    #[schema(min_length = 1, max_length = 2000)]
    pub name: String,
    /// Paragraph text of the page.
    #[schema(min_length = 1)]
    pub content: String,
}

/// Body returned when the page was created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Identifier of the created page.
    pub page_id: Option<String>,
    /// Public URL of the created page.
    pub url: Option<String>,
}

impl From<CreatedPage> for SuccessResponse {
    fn from(page: CreatedPage) -> Self {
        Self {
            success: true,
            message: PAGE_CREATED_MESSAGE.to_owned(),
            page_id: page.page_id,
            url: page.url,
        }
    }
}

/// Body returned for every failure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description including any upstream cause.
    pub message: String,
    /// Machine-readable classification, e.g. `ValidationError` or
    /// `NetworkError`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "NetworkError")]
    pub error_type: Option<String>,
    /// Decoded upstream error body or validation context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Build a failure body classified as `kind`.
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_type: Some(kind.as_str().to_owned()),
            details: None,
        }
    }

    /// Attach structured details.
    #[must_use]
    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }
}
