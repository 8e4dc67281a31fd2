//! STDIO transport.
//!
//! Stdout carries protocol messages only; logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serve `server` over stdin/stdout until the client disconnects.
pub async fn serve(server: McpServer) -> TransportResult<()> {
    info!("{} ready on stdin/stdout", server.name());

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Handshake(e.to_string()))?;

    let reason = session
        .waiting()
        .await
        .map_err(|e| TransportError::Stopped(e.to_string()))?;

    info!("STDIO session closed: {:?}", reason);
    Ok(())
}
