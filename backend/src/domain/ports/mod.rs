//! Domain ports and supporting types for the hexagonal boundary.

mod page_publisher;
mod topic_submission;

#[cfg(test)]
pub use page_publisher::MockPagePublisher;
pub use page_publisher::{PagePublisher, PagePublisherError};
#[cfg(test)]
pub use topic_submission::MockTopicSubmission;
pub use topic_submission::TopicSubmission;
