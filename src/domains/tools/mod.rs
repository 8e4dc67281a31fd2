//! Tools domain module.
//!
//! Tools are named, schema-validated callables exposed to MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `module.rs` - `ToolModule`, the registrable unit every definition exports
//! - `registrar.rs` - The ordered tool list and rmcp router composition
//! - `registry.rs` - Name-based dispatch for the HTTP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`) with a params
//!    struct, `execute()`, `to_tool()` and a `MODULE` constant
//! 2. Export it in `definitions/mod.rs`
//! 3. Append its `MODULE` to `TOOL_MODULES` in `registrar.rs`

pub mod definitions;
mod error;
pub mod module;
mod registry;
pub mod registrar;

pub use error::ToolError;
pub use module::ToolModule;
pub use registrar::{TOOL_MODULES, build_tool_router, register_all_tools};
pub use registry::ToolRegistry;
