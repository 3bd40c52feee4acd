//! Driving port for submitting topics.
//!
//! Inbound adapters (HTTP handler, CLI) call [`TopicSubmission`] with an
//! already validated [`Topic`] and inspect the returned
//! [`SubmissionResult`]; no failure escapes as an error value.

use async_trait::async_trait;

use crate::domain::{SubmissionResult, Topic};

/// Driving port for saving one topic as a page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicSubmission: Send + Sync {
    /// Submit a topic, performing a single outbound attempt.
    ///
    /// Submitting the same topic twice creates two distinct pages.
    async fn submit(&self, topic: &Topic) -> SubmissionResult;
}
