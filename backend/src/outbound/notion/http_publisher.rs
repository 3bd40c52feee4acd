//! Reqwest-backed Notion page publisher.
//!
//! This adapter owns transport details only: request serialisation, bearer
//! and version headers, timeout and HTTP error mapping, and JSON decoding of
//! the created page. Outcome classification stays in the domain.

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use thiserror::Error;

use super::dto::{CreatePageRequestDto, PageResponseDto};
use crate::config::NotionConfig;
use crate::domain::ports::{PagePublisher, PagePublisherError};
use crate::domain::{CreatedPage, Topic};

/// Header carrying the pinned Notion API version.
pub const NOTION_VERSION_HEADER: &str = "notion-version";

const PAGES_PATH: &str = "pages";

/// Upper bound on the response body kept from Notion.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Errors raised while constructing the publisher at startup.
#[derive(Debug, Error)]
pub enum PublisherBuildError {
    /// The page endpoint could not be derived from the base URL.
    #[error("invalid Notion endpoint '{base}': {source}")]
    InvalidEndpoint {
        /// Configured base URL.
        base: String,
        /// Parser diagnostic.
        #[source]
        source: url::ParseError,
    },
    /// A header value contained characters HTTP forbids.
    #[error("invalid value for header {header}")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
    },
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Page publisher performing one HTTP POST per topic against Notion.
pub struct NotionHttpPublisher {
    client: Client,
    pages_endpoint: Url,
    database_id: String,
    title_property: String,
}

impl NotionHttpPublisher {
    /// Build a publisher using a reqwest client with the configured timeout
    /// and default authorisation headers.
    /// ```rust,ignore
    /// let publisher = NotionHttpPublisher::new(&config)?;
    /// ```
    /// # Errors
    ///
    /// Returns [`PublisherBuildError`] when the endpoint, headers, or client
    /// cannot be constructed.
    pub fn new(config: &NotionConfig) -> Result<Self, PublisherBuildError> {
        let pages_endpoint = pages_endpoint(config.api_base_url())?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.token()))
            .map_err(|_| PublisherBuildError::InvalidHeader {
                header: "authorization",
            })?;
        bearer.set_sensitive(true);
        let version = HeaderValue::from_str(config.api_version()).map_err(|_| {
            PublisherBuildError::InvalidHeader {
                header: NOTION_VERSION_HEADER,
            }
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(HeaderName::from_static(NOTION_VERSION_HEADER), version);

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            pages_endpoint,
            database_id: config.database_id().to_owned(),
            title_property: config.title_property().to_owned(),
        })
    }

    /// Endpoint receiving page-creation requests.
    pub fn pages_endpoint(&self) -> &Url {
        &self.pages_endpoint
    }
}

fn pages_endpoint(base: &str) -> Result<Url, PublisherBuildError> {
    let invalid = |source| PublisherBuildError::InvalidEndpoint {
        base: base.to_owned(),
        source,
    };
    let mut root = Url::parse(base).map_err(invalid)?;
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.join(PAGES_PATH).map_err(invalid)
}

#[async_trait]
impl PagePublisher for NotionHttpPublisher {
    async fn create_page(&self, topic: &Topic) -> Result<CreatedPage, PagePublisherError> {
        let payload =
            CreatePageRequestDto::for_topic(&self.database_id, &self.title_property, topic);
        let response = self
            .client
            .post(self.pages_endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = read_capped(response).await?;
        if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
            return Err(PagePublisherError::rejected(
                status.as_u16(),
                String::from_utf8_lossy(&body.bytes),
            ));
        }
        if body.truncated {
            return Err(PagePublisherError::unexpected(format!(
                "Notion page payload exceeded {MAX_RESPONSE_BYTES} bytes"
            )));
        }

        let page = parse_page(&body.bytes)?;
        Ok(CreatedPage {
            status_code: status.as_u16(),
            page_id: page.id,
            url: page.url,
        })
    }
}

struct CappedBody {
    bytes: Vec<u8>,
    truncated: bool,
}

/// Read at most [`MAX_RESPONSE_BYTES`], dropping the remainder.
async fn read_capped(mut response: Response) -> Result<CappedBody, PagePublisherError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(map_transport_error)? {
        let room = MAX_RESPONSE_BYTES.saturating_sub(bytes.len());
        if chunk.len() > room {
            bytes.extend(chunk.iter().take(room).copied());
            return Ok(CappedBody {
                bytes,
                truncated: true,
            });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(CappedBody {
        bytes,
        truncated: false,
    })
}

fn parse_page(body: &[u8]) -> Result<PageResponseDto, PagePublisherError> {
    serde_json::from_slice(body).map_err(|error| {
        PagePublisherError::unexpected(format!("invalid Notion page payload: {error}"))
    })
}

/// Render an error with its source chain; reqwest's own message omits the
/// underlying cause (refused connection, DNS failure).
fn describe(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

fn map_transport_error(error: reqwest::Error) -> PagePublisherError {
    if error.is_builder() {
        PagePublisherError::unexpected(describe(&error))
    } else if error.is_timeout() {
        PagePublisherError::timeout(describe(&error))
    } else {
        PagePublisherError::transport(describe(&error))
    }
}
