//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments were rejected at the schema boundary.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_every_tool_error_is_invalid_params() {
        let not_found = McpError::from(ToolError::not_found("missing"));
        assert_eq!(not_found.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(not_found.message, "Tool not found: missing");

        let invalid = McpError::from(ToolError::invalid_arguments("repeat"));
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
    }
}
