//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::context::{Env, Props, RuntimeMode};
use super::error::Result;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Platform bindings handed to tool modules.
    pub env: Env,

    /// Session identity handed to tool modules.
    pub props: Props,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Resolve the log level before anything else is loaded.
    ///
    /// `MCP_LOG_LEVEL` wins; otherwise development mode logs at debug. Reads
    /// no credentials and logs nothing, so it can run before the subscriber
    /// is installed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let level = std::env::var("MCP_LOG_LEVEL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        if let Some(level) = level {
            return Self { level };
        }

        let development = std::env::var("NODE_ENV")
            .ok()
            .and_then(|v| RuntimeMode::try_parse(&v))
            .is_some_and(|mode| mode.is_development());

        if development {
            Self {
                level: "debug".to_string(),
            }
        } else {
            Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "remote-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            env: Env::default(),
            props: Props::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). Platform bindings use their
    /// own names (`GITHUB_CLIENT_ID`, `DATABASE_URL`, ...).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.env = Env::from_env()?;
        config.props = Props::from_env();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        info!(
            "Configuration loaded (mode: {}, user: {})",
            config.env.runtime_mode().as_str(),
            config.props.login
        );

        Ok(config)
    }
}
