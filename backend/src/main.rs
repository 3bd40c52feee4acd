//! Backend entry-point: loads Notion settings, wires REST endpoints and
//! OpenAPI docs, then serves until shut down.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use topic_gateway::config::NotionSettings;
use topic_gateway::inbound::http::health::HealthState;

/// Listen address used when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Parse the listen address, falling back to [`DEFAULT_BIND_ADDR`].
fn parse_bind_addr(raw: Option<String>) -> std::io::Result<SocketAddr> {
    let raw = raw.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.parse().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid BIND_ADDR '{raw}': {e}"),
        )
    })
}

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    error!(error = %e, "refusing to start");
    std::io::Error::other(e.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let notion = NotionSettings::load_from_args(env::args_os())
        .and_then(|settings| settings.validate())
        .map_err(startup_error)?;
    let bind_addr = parse_bind_addr(env::var("BIND_ADDR").ok()).map_err(startup_error)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(notion, bind_addr))?;
    info!(%bind_addr, "topic gateway listening");
    server.await
}
