//! Environment checks and external tools
//!
//! This module provides:
//! - The pre-flight checklist (destination folder, required tools)
//! - Tool management for Composer and git

pub mod check;
pub mod tool;

pub use check::{preflight, required_tools, ToolInfo};
pub use tool::{composer_tool, git_tool, ToolManager};
