//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::pipeline::{run_pipeline, Outcome, PipelineOptions};
use crate::plan::Step;
use crate::progress::{Reporter, Stage};
use crate::project::{Features, License, ProjectAnswers, ProjectConfig, ProjectType, DEFAULT_VERSION};
use crate::runtime::ToolInfo;
use crate::templates::{TemplateManifest, TemplateRenderer, TemplateSource};
use crate::validate;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Pre-answers the project type question
    pub project_type: Option<ProjectType>,

    /// Pre-answers the project name question
    pub name: Option<String>,

    /// Local directory to use for templates instead of the embedded set
    pub template_dir: Option<PathBuf>,

    /// Skip Composer/git checks and commands
    pub skip_install: bool,

    /// Skip the confirmation after the summary
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    cliclack::intro("WP-Create-Project".cyan().to_string())?;
    cliclack::log::info(format!(
        "You're about to run the setup script for your project in this directory:\n{}",
        format!(" {} ", cwd.display()).black().on_green()
    ))?;

    // Step 1: Collect and confirm answers
    let config = match collect_config(&args, &cwd) {
        Ok(config) => config,
        Err(e) if is_cancelled(&e) => {
            cliclack::outro_cancel("Exiting script...")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    // Step 2: Setup template store
    let renderer = setup_renderer(&args, cli_version)?;

    // Step 3: Run the pipeline
    cliclack::log::info(format!(
        "Scaffolding {}, this might take a while...",
        config.project_type
    ))?;
    let mut reporter = SpinnerReporter::default();
    let options = PipelineOptions {
        skip_install: args.skip_install,
    };
    let outcome = run_pipeline(&config, &renderer, options, &mut reporter).await?;

    // Step 4: Show next steps
    print_tools(&outcome.tools)?;
    print_next_steps(&config, &outcome, args.skip_install)?;

    Ok(())
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
}

/// Ask until the user confirms the summary
fn collect_config(args: &CreateArgs, cwd: &Path) -> Result<ProjectConfig> {
    let created = chrono::Utc::now();

    loop {
        let answers = ask_answers(args)?;
        let config = ProjectConfig::from_answers(answers, cwd, created)?;

        print_summary(&config)?;

        let confirmed = args.yes
            || cliclack::confirm("Does this look right?")
                .initial_value(true)
                .interact()?;
        if confirmed {
            return Ok(config);
        }

        cliclack::log::step("Let's start over")?;
    }
}

fn ask_answers(args: &CreateArgs) -> Result<ProjectAnswers> {
    let project_type = match args.project_type {
        Some(kind) => {
            cliclack::log::info(format!("Project type: {}", kind))?;
            kind
        }
        None => cliclack::select("What do you want to create?")
            .item(ProjectType::Theme, "Theme", "")
            .item(ProjectType::Plugin, "Plugin", "")
            .interact()?,
    };
    let kind = project_type.as_str();

    let name = match &args.name {
        Some(name) => {
            validate::project_name(name)
                .map_err(|message| anyhow::anyhow!("Invalid --name \"{}\": {}", name, message))?;
            cliclack::log::info(format!("{} name: {}", capitalize(kind), name))?;
            name.clone()
        }
        None => cliclack::input(format!("{} name", capitalize(kind)))
            .validate(|input: &String| validate::project_name(input))
            .interact()?,
    };

    let description: String = cliclack::input(format!("{} description", capitalize(kind)))
        .required(false)
        .interact()?;

    let version: String = cliclack::input(format!("{} version", capitalize(kind)))
        .default_input(DEFAULT_VERSION)
        .placeholder(DEFAULT_VERSION)
        .validate(|input: &String| validate::version(input))
        .interact()?;

    let tags = if project_type == ProjectType::Theme {
        let input: String = cliclack::input("Theme tags (comma separated)")
            .placeholder("blog, one-column")
            .required(false)
            .interact()?;
        input.split(',').map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let uri: String = cliclack::input(format!("{} URI", capitalize(kind)))
        .placeholder("https://")
        .required(false)
        .validate(|input: &String| validate::optional_url(input))
        .interact()?;

    let author_name: String = cliclack::input("Author name")
        .validate(|input: &String| validate::author_name(input))
        .interact()?;

    let author_email: String = cliclack::input("Author email")
        .required(false)
        .validate(|input: &String| validate::optional_email(input))
        .interact()?;

    let author_url: String = cliclack::input("Author URL")
        .placeholder("https://")
        .required(false)
        .validate(|input: &String| validate::optional_url(input))
        .interact()?;

    let features = Features {
        phpcs: ask_flag("Add PHP CodeSniffer (WordPress coding standards)?")?,
        git: ask_flag("Initialize a git repository?")?,
        i18n: ask_flag("Add i18n support?")?,
        readme: ask_flag("Add a README?")?,
        editorconfig: ask_flag("Add an EditorConfig file?")?,
    };

    let license = if ask_flag("Add a license?")? {
        let mut select = cliclack::select("License type");
        for license in License::ALL {
            select = select.item(license, license.kind(), license.url());
        }
        Some(select.interact()?)
    } else {
        None
    };

    Ok(ProjectAnswers {
        project_type,
        name,
        description: description.trim().to_string(),
        version,
        tags,
        uri,
        author_name,
        author_email,
        author_url,
        license,
        features,
    })
}

fn ask_flag(prompt: &str) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(true).interact()?)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_summary(config: &ProjectConfig) -> Result<()> {
    let lines: Vec<String> = config
        .summary()
        .into_iter()
        .map(|(label, value)| format!("- {}: {}", label, value.green()))
        .collect();
    cliclack::note("Summary", lines.join("\n"))?;
    Ok(())
}

fn setup_renderer(args: &CreateArgs, cli_version: &str) -> Result<TemplateRenderer> {
    let source = TemplateSource::resolve(args.template_dir.clone());

    match source.local_dir() {
        Some(dir) => {
            cliclack::log::info(format!("Using local templates from {}", dir.display()))?;
            if let Some(manifest) = TemplateManifest::load(dir)? {
                if let Some(warning) = manifest.compatibility_warning(cli_version) {
                    cliclack::log::warning(warning)?;
                }
            }
        }
        None => cliclack::log::info("Using embedded templates")?,
    }

    Ok(TemplateRenderer::new(source))
}

/// Numbered spinner per stage
#[derive(Default)]
struct SpinnerReporter {
    spinner: Option<cliclack::ProgressBar>,
    applied: usize,
}

impl SpinnerReporter {
    fn label(index: usize, stage: Stage) -> String {
        format!("{}. {}", index, stage)
    }
}

impl Reporter for SpinnerReporter {
    fn stage_started(&mut self, index: usize, stage: Stage) {
        let spinner = cliclack::spinner();
        spinner.start(Self::label(index, stage));
        self.spinner = Some(spinner);
        self.applied = 0;
    }

    fn stage_succeeded(&mut self, index: usize, stage: Stage) {
        if let Some(spinner) = self.spinner.take() {
            let label = Self::label(index, stage);
            match stage {
                Stage::GenerateFiles(_) => {
                    spinner.stop(format!("{} ({} steps)", label, self.applied))
                }
                _ => spinner.stop(label),
            }
        }
    }

    fn stage_failed(&mut self, index: usize, stage: Stage, error: &ScaffoldError) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(format!("{} ({} error)", Self::label(index, stage), error.category()));
        }
    }

    fn step_applied(&mut self, _step: &Step) {
        self.applied += 1;
    }
}

fn print_tools(tools: &[ToolInfo]) -> Result<()> {
    for tool in tools {
        cliclack::log::success(format!(
            "{} ({})",
            tool.name,
            tool.version.as_deref().unwrap_or("unknown")
        ))?;
    }
    Ok(())
}

fn print_next_steps(config: &ProjectConfig, outcome: &Outcome, skip_install: bool) -> Result<()> {
    let mut steps = vec![format!("cd {}", config.folder_name())];
    if skip_install && config.features.phpcs {
        steps.push("composer install --ignore-platform-reqs".to_string());
    }
    if skip_install && config.features.git {
        steps.push("git init".to_string());
    }
    let target = match config.project_type {
        ProjectType::Theme => "wp-content/themes",
        ProjectType::Plugin => "wp-content/plugins",
    };
    steps.push(format!(
        "Move the folder into {} and activate it",
        target.bold()
    ));

    println!();
    println!("  Created {} in {}", config.project_name, config.full_project_path.display());
    if let Some(catalog) = &outcome.catalog {
        println!("  Translation catalog: {}", catalog.display());
    }
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Your {} is now ready!", config.project_type))?;

    Ok(())
}
