//! Notion outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `PagePublisher`
//! port against the Notion REST API.

mod dto;
mod http_publisher;

pub use http_publisher::{NOTION_VERSION_HEADER, NotionHttpPublisher, PublisherBuildError};
