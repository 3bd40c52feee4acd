//! Topic submission service classifying page-creation outcomes.
//!
//! The service owns the error-mapping contract between the document
//! database's responses and the gateway's response taxonomy. It makes one
//! call to the [`PagePublisher`] port per topic and never retries.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{PagePublisher, PagePublisherError, TopicSubmission};
use crate::domain::{SubmissionFailure, SubmissionResult, Topic};

/// Submission component backed by a page publisher.
pub struct TopicSubmissionService<P: ?Sized> {
    publisher: Arc<P>,
}

impl<P: ?Sized> TopicSubmissionService<P> {
    /// Create a service that publishes through `publisher`.
    pub fn new(publisher: Arc<P>) -> Self {
        Self { publisher }
    }
}

/// Fold a publisher error into the submission taxonomy.
fn classify(error: PagePublisherError) -> SubmissionFailure {
    match error {
        PagePublisherError::Rejected { status, body } => {
            warn!(status, "document database rejected topic");
            SubmissionFailure::rejected(status, &body)
        }
        PagePublisherError::Transport { message } | PagePublisherError::Timeout { message } => {
            error!(error = %message, "document database unreachable");
            SubmissionFailure::network(message)
        }
        PagePublisherError::Unexpected { message } => {
            error!(error = %message, "topic submission failed unexpectedly");
            SubmissionFailure::unexpected(message)
        }
    }
}

#[async_trait]
impl<P> TopicSubmission for TopicSubmissionService<P>
where
    P: PagePublisher + ?Sized,
{
    async fn submit(&self, topic: &Topic) -> SubmissionResult {
        match self.publisher.create_page(topic).await {
            Ok(page) => {
                info!(
                    page_id = page.page_id.as_deref().unwrap_or_default(),
                    status = page.status_code,
                    "topic saved as page"
                );
                SubmissionResult::Created(page)
            }
            Err(error) => SubmissionResult::Failed(classify(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Classification coverage for the submission service.
    use super::*;
    use crate::domain::ports::MockPagePublisher;
    use crate::domain::{CreatedPage, ErrorKind, PAGE_CREATED_MESSAGE};
    use rstest::{fixture, rstest};

    #[fixture]
    fn topic() -> Topic {
        Topic::try_new(
            "Python Basics".to_owned(),
            "Python is a high-level programming language.".to_owned(),
        )
        .expect("fixture topic")
    }

    fn service_returning(
        outcome: Result<CreatedPage, PagePublisherError>,
    ) -> TopicSubmissionService<MockPagePublisher> {
        let mut publisher = MockPagePublisher::new();
        publisher
            .expect_create_page()
            .times(1)
            .return_once(move |_| outcome);
        TopicSubmissionService::new(Arc::new(publisher))
    }

    #[rstest]
    #[tokio::test]
    async fn created_page_yields_success(topic: Topic) {
        let service = service_returning(Ok(CreatedPage {
            status_code: 201,
            page_id: Some("abc123".to_owned()),
            url: Some("https://notion.so/abc123".to_owned()),
        }));

        let result = service.submit(&topic).await;

        assert!(result.is_success());
        assert_eq!(result.message(), PAGE_CREATED_MESSAGE);
        assert_eq!(result.page_id(), Some("abc123"));
        assert_eq!(result.url(), Some("https://notion.so/abc123"));
        assert_eq!(result.error_kind(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn publisher_receives_the_submitted_topic(topic: Topic) {
        let expected = topic.clone();
        let mut publisher = MockPagePublisher::new();
        publisher
            .expect_create_page()
            .withf(move |received| *received == expected)
            .times(1)
            .return_once(|_| {
                Ok(CreatedPage {
                    status_code: 200,
                    page_id: None,
                    url: None,
                })
            });
        let service = TopicSubmissionService::new(Arc::new(publisher));

        let result = service.submit(&topic).await;
        assert!(result.is_success());
        assert_eq!(result.page_id(), None);
    }

    #[rstest]
    #[case(400, ErrorKind::BadRequest)]
    #[case(401, ErrorKind::Unauthorized)]
    #[case(404, ErrorKind::NotFound)]
    #[case(418, ErrorKind::Remote)]
    #[tokio::test]
    async fn rejections_keep_upstream_status(
        topic: Topic,
        #[case] status: u16,
        #[case] kind: ErrorKind,
    ) {
        let body = format!(r#"{{"object":"error","status":{status}}}"#);
        let service = service_returning(Err(PagePublisherError::rejected(status, body.clone())));

        let result = service.submit(&topic).await;

        assert!(!result.is_success());
        assert_eq!(result.status_code(), status);
        assert_eq!(result.error_kind(), Some(kind));
        assert!(result.message().contains(&body), "message should embed the raw body");
    }

    #[rstest]
    #[case::transport(PagePublisherError::transport("connection reset by peer"))]
    #[case::timeout(PagePublisherError::timeout("operation timed out"))]
    #[tokio::test]
    async fn transport_failures_map_to_network_error(
        topic: Topic,
        #[case] error: PagePublisherError,
    ) {
        let service = service_returning(Err(error));

        let result = service.submit(&topic).await;

        assert_eq!(result.status_code(), 500);
        assert_eq!(result.error_kind(), Some(ErrorKind::Network));
        assert!(result.message().starts_with("Network error occurred: "));
    }

    #[rstest]
    #[tokio::test]
    async fn unexpected_failures_map_to_unexpected_error(topic: Topic) {
        let service = service_returning(Err(PagePublisherError::unexpected("missing field `id`")));

        let result = service.submit(&topic).await;

        assert_eq!(result.status_code(), 500);
        assert_eq!(result.error_kind(), Some(ErrorKind::Unexpected));
        assert_eq!(
            result.message(),
            "Unexpected error occurred: missing field `id`"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_submissions_each_call_the_publisher(topic: Topic) {
        let mut publisher = MockPagePublisher::new();
        let mut next_id = 0_u32;
        publisher.expect_create_page().times(2).returning(move |_| {
            next_id += 1;
            Ok(CreatedPage {
                status_code: 200,
                page_id: Some(format!("page-{next_id}")),
                url: None,
            })
        });
        let service = TopicSubmissionService::new(Arc::new(publisher));

        let first = service.submit(&topic).await;
        let second = service.submit(&topic).await;

        assert_eq!(first.page_id(), Some("page-1"));
        assert_eq!(second.page_id(), Some("page-2"));
    }
}
