//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Ways a transport can fail to start or keep running.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener could not be opened.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP initialize exchange did not complete.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// A running transport stopped with an error.
    #[error("transport stopped: {0}")]
    Stopped(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}
