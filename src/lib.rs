//! MCP tool server library.
//!
//! A Model Context Protocol server scaffold: tools with typed parameter
//! schemas, registered on one server by a central registrar that threads the
//! platform environment and session props through every tool module.
//!
//! # Architecture
//!
//! - **core**: configuration, platform context, error handling, the server
//!   handler and the transports
//! - **domains::tools**: tool definitions, the registrar and the HTTP registry
//!
//! # Example
//!
//! ```rust,no_run
//! use remote_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use self::core::{Config, Env, Error, McpServer, Props, Result, ToolContext};
