//! WP Scaffold Core - library behind the `wp-create` CLI
//!
//! Generates WordPress theme and plugin skeletons from a fixed template set.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Identifier derivation, validation, template
//!   rendering, and the scaffold planner
//! - **Layer 2: Workflow Orchestration** - The materializer, translation
//!   catalog, pre-flight checks, external tools and [`run_pipeline`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use wp_scaffold_core::{ProjectAnswers, ProjectConfig, TemplateRenderer};
//! use wp_scaffold_core::{run_pipeline, PipelineOptions, SilentReporter};
//!
//! let config = ProjectConfig::from_answers(answers, &cwd, chrono::Utc::now())?;
//! let renderer = TemplateRenderer::embedded();
//! run_pipeline(&config, &renderer, PipelineOptions::default(), &mut SilentReporter).await?;
//! ```

pub mod error;
pub mod format;
pub mod i18n;
pub mod materialize;
pub mod pipeline;
pub mod plan;
pub mod progress;
pub mod project;
pub mod runtime;
pub mod templates;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use pipeline::{run_pipeline, Outcome, PipelineOptions};
pub use plan::{plan, Step};
pub use progress::{RecordingReporter, Reporter, SilentReporter, Stage};
pub use project::{Features, License, ProjectAnswers, ProjectConfig, ProjectType};
pub use templates::{TemplateManifest, TemplateRenderer, TemplateSource, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::run;
