//! Topic submission handler.
//!
//! ```text
//! POST /save_topic  Save a topic to Notion as a new page
//! ```

use actix_web::{post, web};

use crate::domain::{SubmissionResult, Topic};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ErrorResponse, SuccessResponse, TopicRequest};
use crate::inbound::http::state::HttpState;

/// Save a new topic as a page in the configured database.
///
/// The topic is validated before any outbound call. Each accepted request
/// creates a new page; identical submissions are not deduplicated.
///
/// # Errors
///
/// - `400 Bad Request`: invalid body (`ValidationError`) or the database
///   rejected the payload (`BadRequest`).
/// - `401 Unauthorized`: the integration token was refused.
/// - `404 Not Found`: the database does not exist or is not shared.
/// - `500 Internal Server Error`: any other upstream status, network
///   failure, or unexpected error.
#[utoipa::path(
    post,
    path = "/save_topic",
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Page created", body = SuccessResponse),
        (status = 400, description = "Invalid topic or rejected payload", body = ErrorResponse),
        (status = 401, description = "Integration token refused", body = ErrorResponse),
        (status = 404, description = "Database not found", body = ErrorResponse),
        (status = 500, description = "Upstream or network failure", body = ErrorResponse)
    ),
    tags = ["Topics"],
    operation_id = "saveTopic"
)]
#[post("/save_topic")]
pub async fn save_topic(
    state: web::Data<HttpState>,
    payload: web::Json<TopicRequest>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let TopicRequest { name, content } = payload.into_inner();
    let topic = Topic::try_new(name, content)?;

    match state.submission.submit(&topic).await {
        SubmissionResult::Created(page) => Ok(web::Json(SuccessResponse::from(page))),
        SubmissionResult::Failed(failure) => Err(failure.into()),
    }
}
