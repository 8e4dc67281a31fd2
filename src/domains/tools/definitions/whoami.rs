//! Session identity tool definition.
//!
//! Reports who the server is acting for and which optional platform bindings
//! are attached. Secrets never appear in the output.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::core::context::ToolContext;
use crate::domains::tools::{ToolError, ToolModule};

/// The tool takes no arguments. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct WhoamiParams {}

/// Whoami tool - describes the current session.
pub struct WhoamiTool;

impl WhoamiTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "whoami";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Describe the identity this server acts for and which optional platform bindings (database, telemetry) are configured.";

    pub const MODULE: ToolModule = ToolModule {
        name: Self::NAME,
        describe: Self::to_tool,
        call: Self::call,
    };

    pub fn execute(ctx: &ToolContext) -> CallToolResult {
        let props = &ctx.props;
        let env = &ctx.env;
        info!("Whoami tool called by {}", props.login);

        let mut identity = format!("{} ({})", props.login, props.name);
        if !props.email.is_empty() {
            identity.push_str(&format!(" <{}>", props.email));
        }

        let text = format!(
            "Session: {}\nRuntime mode: {}\nDatabase: {}\nTelemetry: {}",
            identity,
            env.runtime_mode().as_str(),
            configured(env.has_database()),
            configured(env.has_telemetry()),
        );

        CallToolResult::success(vec![Content::text(text)])
    }

    fn call(ctx: &ToolContext, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let _: WhoamiParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(ctx))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WhoamiParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

fn configured(flag: bool) -> &'static str {
    if flag { "configured" } else { "not configured" }
}
