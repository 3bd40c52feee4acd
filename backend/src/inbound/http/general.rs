//! Informational endpoints.
//!
//! ```text
//! GET /      Welcome message
//! GET /info  API metadata and endpoint listing
//! ```

use std::collections::BTreeMap;

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public API name.
pub const API_NAME: &str = "Notion Integration API";
/// Public API description.
pub const API_DESCRIPTION: &str = "API for saving topics to Notion database";
/// Path serving the interactive documentation.
pub const DOCS_PATH: &str = "/docs";

const ENDPOINTS: [(&str, &str); 5] = [
    ("GET /", "Welcome message"),
    ("GET /health", "Health check"),
    ("GET /info", "API information"),
    ("POST /save_topic", "Save a topic to Notion"),
    ("GET /docs", "Interactive API documentation"),
];

/// Root endpoint body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Endpoint signature to one-line summary.
    pub endpoints: BTreeMap<String, String>,
    pub documentation: String,
}

/// Return a welcome message.
#[utoipa::path(
    get,
    path = "/",
    tags = ["General"],
    responses((status = 200, description = "Service is active", body = WelcomeResponse))
)]
#[get("/")]
pub async fn home() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: format!("Welcome to {API_NAME}"),
        status: "active".to_owned(),
    })
}

/// Return API information and available endpoints.
#[utoipa::path(
    get,
    path = "/info",
    tags = ["General"],
    responses((status = 200, description = "API metadata", body = ApiInfoResponse))
)]
#[get("/info")]
pub async fn api_info() -> web::Json<ApiInfoResponse> {
    web::Json(ApiInfoResponse {
        name: API_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        description: API_DESCRIPTION.to_owned(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(path, summary)| ((*path).to_owned(), (*summary).to_owned()))
            .collect(),
        documentation: DOCS_PATH.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn home_reports_active() {
        let app = actix_test::init_service(App::new().service(home)).await;
        let body: WelcomeResponse =
            actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(body.message, "Welcome to Notion Integration API");
        assert_eq!(body.status, "active");
    }

    #[rstest]
    #[actix_web::test]
    async fn info_lists_every_endpoint() {
        let app = actix_test::init_service(App::new().service(api_info)).await;
        let body: ApiInfoResponse =
            actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/info").to_request())
                .await;
        assert_eq!(body.name, API_NAME);
        assert_eq!(body.version, "1.0.0");
        assert_eq!(body.documentation, "/docs");
        assert_eq!(body.endpoints.len(), 5);
        assert_eq!(
            body.endpoints.get("POST /save_topic").map(String::as_str),
            Some("Save a topic to Notion")
        );
    }
}
