//! Transport selection.
//!
//! `MCP_TRANSPORT` picks the transport (`stdio` or `http`). The HTTP listener
//! reads `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and
//! `MCP_HTTP_CORS`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// The transport the server runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    #[cfg(feature = "stdio")]
    Stdio,

    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Route of the JSON-RPC endpoint.
    pub path: String,
    /// Answer cross-origin requests from any origin.
    pub cors: bool,
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            path: "/mcp".to_string(),
            cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let port = match var("MCP_HTTP_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid MCP_HTTP_PORT '{}'", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: var("MCP_HTTP_HOST").unwrap_or(defaults.host),
            port,
            path: var("MCP_HTTP_PATH").unwrap_or(defaults.path),
            cors: var("MCP_HTTP_CORS")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
                .unwrap_or(defaults.cors),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(all(not(feature = "stdio"), feature = "http"))]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

impl TransportConfig {
    /// Select the transport from `MCP_TRANSPORT`.
    ///
    /// Unset selects the default. Unknown names, or names of transports not
    /// compiled in, fall back to the default with a warning.
    pub fn from_env() -> Self {
        let requested = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        match requested.trim().to_lowercase().as_str() {
            "" => Self::default(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            other => {
                let fallback = Self::default();
                warn!("Transport '{}' is not available, using {}", other, fallback);
                fallback
            }
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "http")]
            Self::Http(http) => write!(f, "http://{}{}", http.address(), http.path),
        }
    }
}
