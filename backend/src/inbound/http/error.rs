//! HTTP adapter mapping for submission failures.
//!
//! Purpose: keep the domain outcome types HTTP-agnostic while allowing Actix
//! handlers to turn validation and submission failures into the JSON error
//! envelope with a consistent status code.

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{ErrorKind, SubmissionFailure, TopicValidationError};
use crate::inbound::http::envelope::ErrorResponse;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP status for an upstream status code. Only 400, 401, and 404 pass
/// through; everything else becomes 500.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use topic_gateway::inbound::http::error::status_for;
///
/// assert_eq!(status_for(404), StatusCode::NOT_FOUND);
/// assert_eq!(status_for(418), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
pub fn status_for(upstream: u16) -> StatusCode {
    match upstream {
        400 => StatusCode::BAD_REQUEST,
        401 => StatusCode::UNAUTHORIZED,
        404 => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure rendered as an [`ErrorResponse`].
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// Reject a malformed request before any outbound call.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(message, ErrorKind::Validation),
        }
    }

    /// Response body.
    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body.message)
    }
}

impl From<TopicValidationError> for ApiError {
    fn from(error: TopicValidationError) -> Self {
        let mut api_error = Self::validation(error.to_string());
        api_error.body = api_error
            .body
            .with_details(Some(json!({ "field": error.field() })));
        api_error
    }
}

impl From<SubmissionFailure> for ApiError {
    fn from(failure: SubmissionFailure) -> Self {
        Self {
            status: status_for(failure.status_code()),
            body: ErrorResponse::new(failure.message(), failure.kind())
                .with_details(failure.details().cloned()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.body)
    }
}

/// Route JSON extractor failures (bad syntax, missing fields, wrong content
/// type) into the validation envelope.
pub fn json_error_handler(error: JsonPayloadError, _request: &HttpRequest) -> actix_web::Error {
    debug!(%error, "rejected malformed topic payload");
    ApiError::validation(format!("Invalid request body: {error}")).into()
}

/// JSON extractor configuration used by every app instance.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

#[cfg(test)]
mod tests {
    //! Status and envelope mapping coverage.
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    #[rstest]
    #[case(400, StatusCode::BAD_REQUEST)]
    #[case(401, StatusCode::UNAUTHORIZED)]
    #[case(404, StatusCode::NOT_FOUND)]
    #[case(403, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(418, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(429, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(502, StatusCode::INTERNAL_SERVER_ERROR)]
    fn upstream_statuses_map_to_http(#[case] upstream: u16, #[case] expected: StatusCode) {
        assert_eq!(status_for(upstream), expected);
    }

    #[rstest]
    fn rejection_details_carry_upstream_json() {
        let failure = SubmissionFailure::rejected(
            404,
            r#"{"object":"error","code":"object_not_found"}"#,
        );
        let error = ApiError::from(failure);

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.body().error_type.as_deref(), Some("NotFound"));
        assert_eq!(
            error.body().details,
            Some(json!({ "object": "error", "code": "object_not_found" }))
        );
    }

    #[rstest]
    fn validation_errors_name_the_offending_field() {
        let error = ApiError::from(TopicValidationError::EmptyContent);

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body().error_type.as_deref(), Some("ValidationError"));
        assert_eq!(error.body().details, Some(json!({ "field": "content" })));
    }

    #[actix_web::test]
    async fn error_response_serialises_envelope() {
        let response = ApiError::from(SubmissionFailure::network("connection refused"))
            .error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: ErrorResponse = serde_json::from_slice(&bytes).expect("error envelope");
        assert!(!body.success);
        assert_eq!(body.error_type.as_deref(), Some("NetworkError"));
        assert_eq!(body.message, "Network error occurred: connection refused");
    }
}
