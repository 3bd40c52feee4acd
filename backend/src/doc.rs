//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request and response envelopes. The document is served by Swagger
//! UI at `/docs` and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::envelope::{ErrorResponse, SuccessResponse, TopicRequest};
use crate::inbound::http::general::{ApiInfoResponse, WelcomeResponse};
use crate::inbound::http::health::HealthResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notion Integration API",
        description = "API for saving topics to Notion database"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::general::home,
        crate::inbound::http::general::api_info,
        crate::inbound::http::health::health,
        crate::inbound::http::topics::save_topic,
    ),
    components(schemas(
        TopicRequest,
        SuccessResponse,
        ErrorResponse,
        WelcomeResponse,
        ApiInfoResponse,
        HealthResponse
    )),
    tags(
        (name = "General", description = "Service metadata and health"),
        (name = "Topics", description = "Saving topics as Notion pages")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/info")]
    #[case("/health")]
    #[case("/save_topic")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("TopicRequest", &["name", "content"])]
    #[case("SuccessResponse", &["success", "message", "page_id", "url"])]
    #[case("ErrorResponse", &["success", "message", "error_type", "details"])]
    fn openapi_envelopes_have_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    fn openapi_title_names_the_service() {
        assert_eq!(ApiDoc::openapi().info.title, "Notion Integration API");
    }
}
