//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes a `MODULE` entry that the
//! registrar lists.

pub mod example;
pub mod whoami;

pub use example::{ExampleTool, ExampleToolParams, TextFormat};
pub use whoami::WhoamiTool;
