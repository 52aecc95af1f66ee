//! Error types for the scaffolding pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A collected field failed its acceptance predicate
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Destination exists or a required tool is missing
    #[error("{0}")]
    Precondition(String),

    /// A template could not be resolved or rendered
    #[error("Failed to render template '{template}': {message}")]
    Render { template: String, message: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A planned destination would leave the project directory
    #[error("Refusing to write outside the project directory: {}", .0.display())]
    UnsafePath(PathBuf),

    /// An external command ran but did not succeed
    #[error("`{command}` failed with exit code {code}{}", format_stderr(.stderr))]
    ExternalTool {
        command: String,
        code: i32,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

impl ScaffoldError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short category name for progress output
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Precondition(_) => "precondition",
            Self::Render { .. } => "render",
            Self::Io { .. } | Self::UnsafePath(_) => "io",
            Self::ExternalTool { .. } => "external-tool",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
