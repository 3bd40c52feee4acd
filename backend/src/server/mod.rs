//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use topic_gateway::Trace;
use topic_gateway::config::NotionConfig;
use topic_gateway::doc::ApiDoc;
use topic_gateway::domain::TopicSubmissionService;
use topic_gateway::domain::ports::TopicSubmission;
use topic_gateway::inbound::http::general::{api_info, home};
use topic_gateway::inbound::http::health::{HealthState, health};
use topic_gateway::inbound::http::json_config;
use topic_gateway::inbound::http::state::HttpState;
use topic_gateway::inbound::http::topics::save_topic;
use topic_gateway::outbound::notion::NotionHttpPublisher;

/// Build the topic submission service over the Notion HTTP publisher.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed from
/// the configuration.
pub(crate) fn build_topic_submission(
    config: &NotionConfig,
) -> std::io::Result<Arc<dyn TopicSubmission>> {
    let publisher = NotionHttpPublisher::new(config)
        .map_err(|e| std::io::Error::other(format!("Notion publisher setup failed: {e}")))?;
    info!(
        endpoint = %publisher.pages_endpoint(),
        timeout_secs = config.timeout().as_secs(),
        "Notion publisher configured"
    );
    Ok(Arc::new(TopicSubmissionService::new(Arc::new(publisher))))
}

#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) health_state: web::Data<HealthState>,
    pub(crate) http_state: web::Data<HttpState>,
}

pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(home)
        .service(api_info)
        .service(health)
        .service(save_topic)
        .service(web::redirect("/docs", "/docs/"))
        .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the publisher cannot be built or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let submission = build_topic_submission(&config.notion)?;
    let http_state = web::Data::new(HttpState::new(submission));
    let ServerConfig {
        notion: _,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
