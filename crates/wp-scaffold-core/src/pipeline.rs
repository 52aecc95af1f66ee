//! End-to-end scaffolding pipeline
//!
//! Runs the numbered stages in order: pre-flight checklist, file generation,
//! translation catalog, Composer install, git init. The first failing stage
//! stops the run; anything already written stays on disk.

use crate::error::Result;
use crate::i18n;
use crate::materialize::materialize;
use crate::plan::plan;
use crate::progress::{Reporter, Stage};
use crate::project::ProjectConfig;
use crate::runtime::{self, composer_tool, git_tool, ToolInfo};
use crate::templates::TemplateStore;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Skip Composer/git: no tool checks, no external commands
    pub skip_install: bool,
}

/// What a successful run produced
#[derive(Debug, Default)]
pub struct Outcome {
    /// Files written, relative to the project root
    pub files: Vec<PathBuf>,
    /// Tools found during the pre-flight checklist
    pub tools: Vec<ToolInfo>,
    /// The generated translation catalog, when i18n is enabled
    pub catalog: Option<PathBuf>,
}

/// Numbers stages as they start and reports how they end
struct StageRunner<'a> {
    reporter: &'a mut dyn Reporter,
    counter: usize,
}

impl<'a> StageRunner<'a> {
    fn start(&mut self, stage: Stage) -> usize {
        self.counter += 1;
        self.reporter.stage_started(self.counter, stage);
        self.counter
    }

    fn finish<T>(&mut self, index: usize, stage: Stage, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.reporter.stage_succeeded(index, stage),
            Err(e) => self.reporter.stage_failed(index, stage, e),
        }
        result
    }
}

pub async fn run_pipeline<S>(
    config: &ProjectConfig,
    store: &S,
    options: PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<Outcome>
where
    S: TemplateStore + ?Sized,
{
    let mut runner = StageRunner {
        reporter,
        counter: 0,
    };
    let mut outcome = Outcome::default();
    let root = &config.full_project_path;
    let features = &config.features;
    let run_tools = !options.skip_install;

    let stage = Stage::PreFlight;
    let index = runner.start(stage);
    let result = runtime::preflight(config, options.skip_install);
    outcome.tools = runner.finish(index, stage, result)?;

    let stage = Stage::GenerateFiles(config.project_type);
    let index = runner.start(stage);
    let steps = plan(config);
    let result = materialize(&steps, root, store, config, &mut *runner.reporter).await;
    outcome.files = runner.finish(index, stage, result)?;

    if features.i18n {
        let stage = Stage::TranslationCatalog;
        let index = runner.start(stage);
        let result = i18n::generate_pot(config, root).await;
        outcome.catalog = Some(runner.finish(index, stage, result)?);
    }

    if features.phpcs && run_tools {
        let stage = Stage::ComposerInstall;
        let index = runner.start(stage);
        let result = composer_tool()
            .run(&["install", "--ignore-platform-reqs"], root)
            .await;
        runner.finish(index, stage, result)?;
    }

    if features.git && run_tools {
        let stage = Stage::GitInit;
        let index = runner.start(stage);
        let result = git_tool().run(&["init"], root).await;
        runner.finish(index, stage, result)?;
    }

    Ok(outcome)
}
