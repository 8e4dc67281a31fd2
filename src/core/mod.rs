//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, the platform context handed to tools, error handling,
//! server lifecycle management and the transport layer.

pub mod config;
pub mod context;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, LoggingConfig};
pub use context::{Env, Props, RuntimeMode, ToolContext};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
