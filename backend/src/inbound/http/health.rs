//! Health endpoint for orchestration and load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "notion-integration-api";

/// Shared readiness flag, flipped once the server has bound its listener.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Create a new health state starting as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Health probe body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` once ready, `starting` before.
    pub status: String,
    /// Service identifier.
    pub service: String,
}

/// Health probe. Return 200 once the server can handle traffic and 503
/// otherwise.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["General"],
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
        (status = 503, description = "Server is still starting", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    let (mut response, status) = if state.is_ready() {
        (HttpResponse::Ok(), "healthy")
    } else {
        (HttpResponse::ServiceUnavailable(), "starting")
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthResponse {
            status: status.to_owned(),
            service: SERVICE_NAME.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case(true, StatusCode::OK, "healthy")]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE, "starting")]
    #[actix_web::test]
    async fn reports_readiness(
        #[case] ready: bool,
        #[case] expected_status: StatusCode,
        #[case] expected_body: &str,
    ) {
        let state = web::Data::new(HealthState::new());
        if ready {
            state.mark_ready();
        }
        let app = actix_test::init_service(App::new().app_data(state).service(health)).await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(response.status(), expected_status);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let body: HealthResponse = actix_test::read_body_json(response).await;
        assert_eq!(body.status, expected_body);
        assert_eq!(body.service, SERVICE_NAME);
    }
}
