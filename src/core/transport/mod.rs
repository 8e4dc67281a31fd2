//! Transport layer for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): a full rmcp session over
//!   stdin/stdout.
//! - **HTTP** (feature `http`): stateless JSON-RPC over POST, served by axum
//!   and dispatched through the same tool list as the rmcp router.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("enable at least one transport feature: `stdio` or `http`");

use tracing::info;

use crate::core::McpServer;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use config::HttpConfig;

/// Runs an [`McpServer`] on whichever transport the configuration selects.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the peer disconnects or the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config);

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => stdio::serve(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(http) => http::serve(server, http).await,
        }
    }
}
