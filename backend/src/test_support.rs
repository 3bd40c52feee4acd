//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). [`StubNotionServer`] stands in for the Notion
//! REST API on a loopback port and records every request it receives.

use std::collections::BTreeMap;
use std::io;
use std::net::TcpListener;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;

/// Canned answer returned by [`StubNotionServer`] for every request.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    content_type: &'static str,
    body: String,
    delay: Option<Duration>,
}

impl StubReply {
    /// Reply with a JSON document.
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
        }
    }

    /// Reply with a plain-text body.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
            delay: None,
        }
    }

    /// Hold the reply back for `delay` before answering.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Request observed by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Headers keyed by lower-case name.
    pub headers: BTreeMap<String, String>,
    /// Decoded JSON body, or `Value::Null` when the body was not JSON.
    pub body: Value,
}

impl RecordedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

struct StubState {
    reply: StubReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn record(
    request: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubState>,
) -> HttpResponse {
    let headers = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_owned(), value.to_owned()))
        })
        .collect();
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method: request.method().as_str().to_owned(),
            path: request.path().to_owned(),
            headers,
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });

    let reply = &state.reply;
    if let Some(delay) = reply.delay {
        actix_web::rt::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type(reply.content_type)
        .body(reply.body.clone())
}

/// Loopback HTTP server answering every request with one [`StubReply`].
///
/// # Examples
/// ```no_run
/// use serde_json::json;
/// use topic_gateway::test_support::{StubNotionServer, StubReply};
///
/// # async fn demo() -> std::io::Result<()> {
/// let server = StubNotionServer::start(StubReply::json(200, json!({ "id": "abc" })))?;
/// assert!(server.base_url().ends_with("/v1/"));
/// server.stop().await;
/// # Ok(())
/// # }
/// ```
pub struct StubNotionServer {
    base_url: String,
    state: web::Data<StubState>,
    handle: ServerHandle,
}

impl StubNotionServer {
    /// Bind an ephemeral port and start serving `reply`.
    ///
    /// Must be called from within an Actix runtime.
    ///
    /// # Errors
    ///
    /// Returns [`io::Error`] when the listener cannot be bound.
    pub fn start(reply: StubReply) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let state = web::Data::new(StubState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let server_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .default_service(web::to(record))
        })
        .disable_signals()
        .workers(1)
        .listen(listener)?
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            base_url: format!("http://{addr}/v1/"),
            state,
            handle,
        })
    }

    /// API root to configure as the Notion base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stop the server without waiting for in-flight replies.
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Base URL for a loopback port with no listener behind it.
///
/// # Errors
///
/// Returns [`io::Error`] when a port cannot be reserved.
pub fn unreachable_base_url() -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/v1/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn recorded_header_lookup_ignores_case() {
        let request = RecordedRequest {
            method: "POST".to_owned(),
            path: "/v1/pages".to_owned(),
            headers: BTreeMap::from([("notion-version".to_owned(), "2022-06-28".to_owned())]),
            body: Value::Null,
        };
        assert_eq!(request.header("Notion-Version"), Some("2022-06-28"));
        assert_eq!(request.header("authorization"), None);
    }
}
