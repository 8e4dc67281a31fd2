//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler. Tools are attached by the
//! registrar in `domains/tools/registrar.rs`; adding a tool does not require
//! modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::context::ToolContext;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str =
    "This is a template MCP server. Call exampleTool to format text, or whoami to inspect the session.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Tool calls are
/// routed by the `#[tool_handler]` macro through `tool_router`.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Environment and props shared with every tool.
    context: ToolContext,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let context = ToolContext::new(config.env.clone(), config.props.clone());
        let tool_router = build_tool_router::<Self>(&context);

        info!("Registered {} tool(s)", tool_router.list_all().len());

        Self {
            config: Arc::new(config),
            context,
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the context handed to tools.
    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// All tools, in registration order (for HTTP transport).
    pub fn tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name (for HTTP transport).
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        ToolRegistry::new(self.context.clone()).call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
