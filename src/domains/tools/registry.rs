//! Tool Registry - tool metadata and name-based dispatch.
//!
//! The rmcp router serves STDIO. The HTTP transport has no rmcp peer, so it
//! dispatches through this registry instead. Both read `TOOL_MODULES` and go
//! through each tool's own parameter validation.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use crate::core::context::ToolContext;

use super::{TOOL_MODULES, ToolError, ToolModule};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    ctx: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        TOOL_MODULES.iter().map(|m| m.name).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn get_all_tools() -> Vec<Tool> {
        TOOL_MODULES.iter().map(|m| (m.describe)()).collect()
    }

    fn find(name: &str) -> Option<&'static ToolModule> {
        TOOL_MODULES.iter().find(|m| m.name == name)
    }

    /// Dispatch a tool call by name. Missing arguments count as `{}`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        match Self::find(name) {
            Some(module) => module.invoke(&self.ctx, arguments),
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(ToolContext::default())
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_registry_tool_names() {
        assert_eq!(registry().tool_names(), vec!["whoami", "exampleTool"]);
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let names: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, registry().tool_names());
    }

    #[test]
    fn test_registry_call_example() {
        let result = registry()
            .call_tool("exampleTool", args(json!({ "message": "hello world" })))
            .unwrap();
        let envelope = serde_json::to_value(&result).unwrap();
        assert_eq!(
            envelope["content"][0]["text"],
            json!("Example Tool Result: Hello World")
        );
    }

    #[test]
    fn test_registry_call_whoami_without_arguments() {
        let result = registry().call_tool("whoami", None).unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_registry_call_invalid_arguments() {
        let err = registry()
            .call_tool("exampleTool", args(json!({ "message": "x", "repeat": 11 })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_registry_call_unknown() {
        let err = registry().call_tool("unknown", args(json!({}))).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
