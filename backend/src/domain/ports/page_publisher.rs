//! Driven port for creating pages in the document database.
//!
//! The domain owns the outcome contract so submission classification stays
//! adapter-agnostic; adapters only translate transport details into
//! [`PagePublisherError`] variants.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CreatedPage, Topic};

/// Errors surfaced while creating a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagePublisherError {
    /// The document database answered with a status other than 200/201.
    #[error("document database rejected the page with status {status}: {body}")]
    Rejected {
        /// Upstream status code.
        status: u16,
        /// Raw upstream response body.
        body: String,
    },
    /// Network transport failed before a complete response arrived.
    #[error("document database transport failed: {message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },
    /// The call exceeded the configured timeout.
    #[error("document database call timed out: {message}")]
    Timeout {
        /// Timeout description.
        message: String,
    },
    /// Request construction or response decoding failed.
    #[error("document database call failed unexpectedly: {message}")]
    Unexpected {
        /// Failure description.
        message: String,
    },
}

impl PagePublisherError {
    /// Build a [`PagePublisherError::Rejected`] error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Build a [`PagePublisherError::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`PagePublisherError::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`PagePublisherError::Unexpected`] error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Port for creating one page per topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PagePublisher: Send + Sync {
    /// Create a page titled with the topic name whose body is the topic
    /// content. Implementations perform exactly one outbound call.
    async fn create_page(&self, topic: &Topic) -> Result<CreatedPage, PagePublisherError>;
}
