//! AppsNgen widget CLI - scaffolds web widget projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use widget_core::tui::CreateArgs;

/// CLI version - used for template pack compatibility checking
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "widget-tools")]
#[command(about = "CLI for scaffolding AppsNgen web widget projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new widget project
    Create(CliCreateArgs),
    /// Build a template pack zip from a local template directory (for development use)
    Pack(PackArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Local directory to use for templates instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Widget name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Widget description
    #[arg(long)]
    pub description: Option<String>,

    /// Examples to include (comma-separated: preferences,events,datasource,quotes,timeseries,news)
    #[arg(short, long, value_delimiter = ',')]
    pub examples: Option<Vec<String>>,

    /// Skip npm install and the grunt build after generation
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            name: args.name,
            description: args.description,
            examples: args.examples,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Local directory containing the template tree to pack
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Output zip path (defaults to "<pack name>.zip")
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
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

    // Handle subcommands
    match args.command {
        Some(Command::Create(create_args)) => {
            // Run the prompt flow with the create args
            let result = widget_core::run(create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Pack(pack_args)) => {
            // Build the template pack zip
            widget_core::pack::build_pack(&pack_args.template_dir, &pack_args.output)
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = widget_core::run(CreateArgs::default(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
