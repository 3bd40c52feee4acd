//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TopicSubmission;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub submission: Arc<dyn TopicSubmission>,
}

impl HttpState {
    /// Construct state around the topic submission port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use topic_gateway::config::NotionConfig;
    /// use topic_gateway::domain::TopicSubmissionService;
    /// use topic_gateway::inbound::http::state::HttpState;
    /// use topic_gateway::outbound::notion::NotionHttpPublisher;
    ///
    /// let config = NotionConfig::new("secret_token", "db-id");
    /// let publisher = NotionHttpPublisher::new(&config).expect("publisher");
    /// let state = HttpState::new(Arc::new(TopicSubmissionService::new(Arc::new(publisher))));
    /// # let _ = state;
    /// ```
    pub fn new(submission: Arc<dyn TopicSubmission>) -> Self {
        Self { submission }
    }
}
