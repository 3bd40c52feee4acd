//! Domain primitives, ports, and the topic submission service.
//!
//! Purpose: keep topic validation and outcome classification free of HTTP and
//! Notion transport concerns. Inbound adapters build a [`Topic`], call the
//! [`ports::TopicSubmission`] port, and translate the returned
//! [`SubmissionResult`] into their own envelope.
//!
//! Public surface:
//! - Topic — validated name/content pair.
//! - SubmissionResult — created page or classified failure.
//! - ErrorKind — stable machine-readable failure classification.
//! - TopicSubmissionService — submission component over a page publisher.

pub mod error;
pub mod ports;
pub mod submission;
pub mod topic;
mod topic_submission_service;

pub use self::error::ErrorKind;
pub use self::submission::{
    CreatedPage, PAGE_CREATED_MESSAGE, SubmissionFailure, SubmissionResult,
};
pub use self::topic::{TOPIC_NAME_MAX_CHARS, Topic, TopicValidationError};
pub use self::topic_submission_service::TopicSubmissionService;
