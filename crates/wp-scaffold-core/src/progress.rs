//! Progress events emitted while scaffolding
//!
//! Reporters only observe; nothing they do changes control flow.

use crate::error::ScaffoldError;
use crate::plan::Step;
use crate::project::ProjectType;
use std::fmt;

/// A named stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreFlight,
    GenerateFiles(ProjectType),
    TranslationCatalog,
    ComposerInstall,
    GitInit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PreFlight => write!(f, "Pre-flight checklist"),
            Stage::GenerateFiles(kind) => write!(f, "Generating {} files", kind),
            Stage::TranslationCatalog => write!(f, "Adding i18n support"),
            Stage::ComposerInstall => write!(f, "Installing composer dependencies"),
            Stage::GitInit => write!(f, "Initializing git repo"),
        }
    }
}

/// Receives pipeline events
///
/// `index` is the 1-based position of the stage among the stages that run.
pub trait Reporter {
    fn stage_started(&mut self, index: usize, stage: Stage);

    fn stage_succeeded(&mut self, index: usize, stage: Stage);

    fn stage_failed(&mut self, index: usize, stage: Stage, error: &ScaffoldError);

    /// Called after the materializer applies a step
    fn step_applied(&mut self, _step: &Step) {}
}

/// Discards every event
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn stage_started(&mut self, _index: usize, _stage: Stage) {}

    fn stage_succeeded(&mut self, _index: usize, _stage: Stage) {}

    fn stage_failed(&mut self, _index: usize, _stage: Stage, _error: &ScaffoldError) {}
}

/// Keeps every event, for tests and non-interactive callers
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(usize, Stage),
    Succeeded(usize, Stage),
    Failed(usize, Stage, String),
    Applied(Step),
}

impl Reporter for RecordingReporter {
    fn stage_started(&mut self, index: usize, stage: Stage) {
        self.events.push(Event::Started(index, stage));
    }

    fn stage_succeeded(&mut self, index: usize, stage: Stage) {
        self.events.push(Event::Succeeded(index, stage));
    }

    fn stage_failed(&mut self, index: usize, stage: Stage, error: &ScaffoldError) {
        self.events.push(Event::Failed(index, stage, error.to_string()));
    }

    fn step_applied(&mut self, step: &Step) {
        self.events.push(Event::Applied(step.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::PreFlight.to_string(), "Pre-flight checklist");
        assert_eq!(
            Stage::GenerateFiles(ProjectType::Plugin).to_string(),
            "Generating plugin files"
        );
        assert_eq!(Stage::GitInit.to_string(), "Initializing git repo");
    }
}
