//! Charm-style CLI prompts using cliclack

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::features::RawAnswers;
use crate::pack::{self, PackSource, TemplatePack};
use crate::runtime::{check, tasks};
use crate::{generate, Error, Generated};

/// User agent for remote pack fetches.
const USER_AGENT: &str = "widget-tools";

/// Upgrade command shown in version warnings.
const UPGRADE_COMMAND: &str = "cargo install widget-tools --force";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of fetching from remote
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Widget name (skips the name prompt)
    pub name: Option<String>,

    /// Widget description (skips the description prompt)
    pub description: Option<String>,

    /// Examples to include (non-interactive selection)
    pub examples: Option<Vec<String>>,

    /// Skip npm install and the grunt build after generation
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("AppsNgen Web Widget")?;

    // Step 1: Load the template pack
    let pack = load_pack(&args).await?;

    // Check version compatibility
    if let Some(warning) =
        pack::check_compatibility(cli_version, &pack.manifest().version, UPGRADE_COMMAND)
    {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    // Step 2: Select directory
    let project_dir = select_directory(&args)?;

    // Step 3: Collect answers
    let answers = collect_answers(&args)?;

    // Step 4: Generate the project
    let generated = create_project(&pack, &project_dir, &answers).await?;

    // Step 5: Install dependencies and run the build
    let installed = if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        false
    } else {
        run_project_tasks(&args, &project_dir).await?
    };

    // Step 6: Show next steps
    print_next_steps(&project_dir, &generated, installed)?;

    Ok(())
}

async fn load_pack(args: &CreateArgs) -> Result<TemplatePack> {
    let source = match &args.template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            PackSource::local(path.clone())
        }
        None => {
            cliclack::log::info("Using remote templates")?;
            PackSource::remote_default()?
        }
    };

    let spinner = cliclack::spinner();
    spinner.start("Loading template pack...");

    match source.load(USER_AGENT).await {
        Ok(pack) => {
            spinner.stop(format!(
                "Template pack: {} - {}",
                pack.manifest().name,
                pack.manifest().description
            ));
            Ok(pack)
        }
        Err(e) => {
            spinner.stop("Failed to load template pack");
            Err(e)
        }
    }
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Warn if directory exists and has files; generation is additive and
    // never removes what is already there.
    if path.exists() && path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

/// Collect the full answer set, prompting for anything not given as a flag.
fn collect_answers(args: &CreateArgs) -> Result<RawAnswers> {
    let widget_name = match &args.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ if args.yes => {
            anyhow::bail!("A widget name is required; pass --name in non-interactive mode.")
        }
        _ => cliclack::input("Widget name")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Widget name is required")
                } else {
                    Ok(())
                }
            })
            .interact()?,
    };

    let default_description = format!("{} description", widget_name.trim());
    let widget_description = match &args.description {
        Some(description) => description.clone(),
        None if args.yes => default_description,
        None => cliclack::input("Widget description")
            .default_input(&default_description)
            .interact()?,
    };

    if let Some(examples) = &args.examples {
        return answers_from_examples(widget_name, widget_description, examples);
    }

    let enable_preferences = confirm(args, "Include preferences usage example?")?;
    let enable_events = confirm(args, "Include events usage example?")?;
    let enable_data_source = confirm(args, "Include data sources usage example?")?;

    // The sub-examples are only asked when data sources are accepted.
    let (quotes, time_series, news) = if enable_data_source {
        (
            Some(confirm(args, "Include quotes data source usage example?")?),
            Some(confirm(args, "Include time series data source usage example?")?),
            Some(confirm(args, "Include news data source usage example?")?),
        )
    } else {
        (None, None, None)
    };

    Ok(RawAnswers {
        widget_name,
        widget_description,
        enable_preferences_support: enable_preferences,
        enable_events_support: enable_events,
        enable_data_source_support: enable_data_source,
        enable_quotes_support: quotes,
        enable_time_series_support: time_series,
        enable_news_support: news,
    })
}

/// Confirm prompt defaulting to yes; `--yes` accepts without asking.
fn confirm(args: &CreateArgs, message: &str) -> Result<bool> {
    if args.yes {
        return Ok(true);
    }
    Ok(cliclack::confirm(message).initial_value(true).interact()?)
}

/// Build answers from a `--examples` list instead of prompting.
///
/// Naming a data-source sub-example implies data-source support itself;
/// the engine would otherwise force the sub-flag off.
fn answers_from_examples(
    widget_name: String,
    widget_description: String,
    examples: &[String],
) -> Result<RawAnswers> {
    let mut answers = RawAnswers {
        widget_name,
        widget_description,
        ..Default::default()
    };

    for example in examples {
        match example.to_lowercase().as_str() {
            "preferences" => answers.enable_preferences_support = true,
            "events" => answers.enable_events_support = true,
            "datasource" | "data-source" => answers.enable_data_source_support = true,
            "quotes" => {
                answers.enable_quotes_support = Some(true);
                answers.enable_data_source_support = true;
            }
            "timeseries" | "time-series" => {
                answers.enable_time_series_support = Some(true);
                answers.enable_data_source_support = true;
            }
            "news" => {
                answers.enable_news_support = Some(true);
                answers.enable_data_source_support = true;
            }
            other => cliclack::log::warning(format!("Unknown example: {}", other))?,
        }
    }

    Ok(answers)
}

async fn create_project(
    pack: &TemplatePack,
    project_dir: &Path,
    answers: &RawAnswers,
) -> Result<Generated> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match generate(pack, project_dir, answers).await {
        Ok(generated) => {
            spinner.stop(format!(
                "Created {} files in {}",
                generated.files.len(),
                project_dir.display()
            ));
            Ok(generated)
        }
        Err(Error::Validation(message)) => {
            // Bad input, not a broken destination: tell the user what to fix.
            spinner.stop("Invalid input");
            anyhow::bail!("{message}");
        }
        Err(err) => {
            spinner.stop("Project creation failed");
            Err(err.into())
        }
    }
}

/// Install dependencies and run the grunt build. Returns whether both ran.
async fn run_project_tasks(args: &CreateArgs, project_dir: &Path) -> Result<bool> {
    let node = check::check_node();
    let npm = check::check_npm();
    if !node.available || !npm.available {
        cliclack::log::warning(
            "Node.js and npm are required to build the widget; skipping installation",
        )?;
        return Ok(false);
    }
    cliclack::log::success(format!(
        "Node.js {} detected",
        node.version.as_deref().unwrap_or("unknown")
    ))?;

    let proceed = if args.yes {
        true
    } else {
        cliclack::confirm("Install dependencies and run the build now?")
            .initial_value(true)
            .interact()?
    };
    if !proceed {
        return Ok(false);
    }

    tasks::install_dependencies(project_dir).await?;
    tasks::run_build(project_dir).await?;

    Ok(true)
}

fn print_next_steps(project_dir: &Path, generated: &Generated, installed: bool) -> Result<()> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_ref() != Some(&project_dir.to_path_buf()) {
        steps.push(format!("cd {}", project_dir.display()));
    }

    if !installed {
        steps.push("npm install".to_string());
        steps.push("grunt".to_string());
    }

    steps.push(format!(
        "Edit src/application.xml to adjust the '{}' widget metadata",
        generated.flags.widget_name
    ));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
