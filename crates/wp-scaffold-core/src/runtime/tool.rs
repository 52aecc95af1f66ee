//! External CLI tools (Composer, git)
//!
//! Provides presence checks for the pre-flight checklist and runs the
//! post-generation commands inside the generated project.

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Upper bound for a single external command (dependency installs can be slow)
const COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "composer")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
}

/// Manager for checking and running CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// The command used to probe for the tool
    pub fn version_command(&self) -> String {
        format!("{} --version", self.config.name)
    }

    /// Check that `<tool> --version` runs and succeeds
    pub fn is_installed(&self) -> bool {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
                } else {
                    None
                }
            })
    }

    /// Fail with a pre-flight error when the tool is missing
    pub fn require(&self) -> Result<()> {
        if self.is_installed() {
            Ok(())
        } else {
            Err(ScaffoldError::Precondition(format!(
                "Unable to check {}'s version (\"{}\"), please make sure {} is installed and globally available before running this script.",
                self.config.display_name,
                self.version_command(),
                self.config.display_name
            )))
        }
    }

    /// Run the tool with `args` inside `dir`, capturing its output
    pub async fn run(&self, args: &[&str], dir: &Path) -> Result<()> {
        let command = std::iter::once(self.config.name)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        let child = TokioCommand::new(self.config.name)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ScaffoldError::ExternalTool {
                command: command.clone(),
                code: -1,
                stderr: e.to_string(),
            })?;

        let output = match timeout(COMMAND_TIMEOUT, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| ScaffoldError::ExternalTool {
                command: command.clone(),
                code: -1,
                stderr: e.to_string(),
            })?,
            // The child is killed when dropped
            Err(_) => {
                return Err(ScaffoldError::ExternalTool {
                    command,
                    code: -1,
                    stderr: format!("timed out after {} seconds", COMMAND_TIMEOUT.as_secs()),
                })
            }
        };

        if output.status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::ExternalTool {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Pre-configured tool manager for Composer
pub fn composer_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "composer",
        display_name: "Composer",
    })
}

/// Pre-configured tool manager for git
pub fn git_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "git",
        display_name: "Git",
    })
}
