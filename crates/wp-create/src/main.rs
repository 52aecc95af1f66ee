//! wp-create CLI - WordPress theme and plugin scaffolding

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wp_scaffold_core::tui::CreateArgs;
use wp_scaffold_core::ProjectType;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "wp-create")]
#[command(about = "CLI for scaffolding WordPress themes and plugins")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new theme or plugin in the current directory
    Create(CliCreateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project type (theme or plugin)
    #[arg(short = 't', long = "type", value_parser = parse_project_type)]
    pub project_type: Option<ProjectType>,

    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Local template directory to use instead of the embedded templates
    /// (falls back to WP_CREATE_TEMPLATE_DIR)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip the Composer and git steps
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Skip the confirmation after the summary
    #[arg(short, long)]
    pub yes: bool,
}

fn parse_project_type(value: &str) -> Result<ProjectType, String> {
    ProjectType::parse(value).ok_or_else(|| format!("expected \"theme\" or \"plugin\", got \"{}\"", value))
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            project_type: args.project_type,
            name: args.name,
            template_dir: args.template_dir,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand provided, default to create behavior (interactive mode)
    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        None => CliCreateArgs::default(),
    };

    let result = wp_scaffold_core::run(create_args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{}{}{}", "Error".on_red(), " - ".red(), e);
        std::process::exit(1);
    }
}
