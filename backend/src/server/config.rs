//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use topic_gateway::config::NotionConfig;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) notion: NotionConfig,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from validated Notion settings.
    #[must_use]
    pub fn new(notion: NotionConfig, bind_addr: SocketAddr) -> Self {
        Self { notion, bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
