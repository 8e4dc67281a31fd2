//! Tool modules.
//!
//! A `ToolModule` bundles what the server needs to expose one tool: its
//! metadata and a validated call entry point. The rmcp route and the HTTP
//! dispatch are both derived from it, so the two transports cannot drift.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, JsonObject, Tool},
};

use super::ToolError;
use crate::core::context::ToolContext;

/// Validated call entry point of a tool.
pub type CallFn = fn(&ToolContext, JsonObject) -> Result<CallToolResult, ToolError>;

/// One registrable tool.
#[derive(Clone, Copy)]
pub struct ToolModule {
    /// Name as registered in MCP.
    pub name: &'static str,

    /// Builds the tool metadata (name, description, input schema).
    pub describe: fn() -> Tool,

    /// Parses the arguments and runs the tool.
    pub call: CallFn,
}

impl ToolModule {
    /// Build the rmcp route, capturing the shared context.
    pub fn route<S>(&self, ctx: &ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let call = self.call;
        let ctx = ctx.clone();
        ToolRoute::new_dyn((self.describe)(), move |tcc: ToolCallContext<'_, S>| {
            let args = tcc.arguments.clone().unwrap_or_default();
            futures::future::ready(call(&ctx, args).map_err(McpError::from)).boxed()
        })
    }

    /// The module's registration function.
    pub fn register<S>(&self, router: ToolRouter<S>, ctx: &ToolContext) -> ToolRouter<S>
    where
        S: Send + Sync + 'static,
    {
        router.with_route(self.route(ctx))
    }

    /// Run the tool outside an rmcp session.
    pub fn invoke(
        &self,
        ctx: &ToolContext,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        (self.call)(ctx, arguments.unwrap_or_default())
    }
}

impl std::fmt::Debug for ToolModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolModule").field("name", &self.name).finish()
    }
}
