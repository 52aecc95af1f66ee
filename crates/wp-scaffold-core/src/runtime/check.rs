//! Pre-flight checklist, run before anything is written

use super::tool::{composer_tool, git_tool, ToolManager};
use crate::error::{Result, ScaffoldError};
use crate::project::ProjectConfig;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
}

/// Tools the enabled features will invoke after generation
pub fn required_tools(config: &ProjectConfig) -> Vec<ToolManager> {
    let mut tools = Vec::new();
    if config.features.phpcs {
        tools.push(composer_tool());
    }
    if config.features.git {
        tools.push(git_tool());
    }
    tools
}

/// Verify the destination is free and, unless `skip_tools`, that every
/// required tool is available
pub fn preflight(config: &ProjectConfig, skip_tools: bool) -> Result<Vec<ToolInfo>> {
    check_destination(config)?;

    if skip_tools {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for tool in required_tools(config) {
        tool.require()?;
        found.push(ToolInfo {
            name: tool.config().display_name,
            version: tool.get_version(),
        });
    }
    Ok(found)
}

/// The project folder must not exist yet
pub fn check_destination(config: &ProjectConfig) -> Result<()> {
    if config.full_project_path.exists() {
        return Err(ScaffoldError::Precondition(format!(
            "A folder with the name \"{}\" already exists at this location. Please select a different name for your {} and try again.",
            config.folder_name(),
            config.project_type
        )));
    }
    Ok(())
}
