//! Tool registrar - attaches every tool module to one router.
//!
//! Registration is static: `TOOL_MODULES` is walked in order and each
//! module registers itself with the same shared context. The HTTP registry
//! reads the same list.

use rmcp::handler::server::tool::ToolRouter;
use tracing::debug;

use crate::core::context::ToolContext;

use super::ToolModule;
use super::definitions::{ExampleTool, WhoamiTool};

/// Every tool the server exposes, in registration order.
pub const TOOL_MODULES: &[ToolModule] = &[WhoamiTool::MODULE, ExampleTool::MODULE];

/// Register all tools on `router`, threading the shared context through.
pub fn register_all_tools<S>(router: ToolRouter<S>, ctx: &ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    debug!("Registering tools for {}", ctx.props.login);

    TOOL_MODULES
        .iter()
        .fold(router, |router, module| module.register(router, ctx))
}

/// Build a fresh tool router with all registered tools.
pub fn build_tool_router<S>(ctx: &ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    register_all_tools(ToolRouter::new(), ctx)
}
