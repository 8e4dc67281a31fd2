//! Domains module containing the server's business logic.
//!
//! Only the tools domain exists today; resources or prompts would live next
//! to it as sibling modules.

pub mod tools;
