//! Project tasks: dependency installation and the downstream build
//!
//! Runs `npm install` and `grunt` inside the generated project directory,
//! streaming their output. The engine never invokes these on its own; the
//! prompt flow (or whatever front-end drives generation) decides. The child
//! process gets its own working directory — the tool's own process state is
//! never mutated.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for dependency installation.
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for the downstream build.
const BUILD_TIMEOUT: Duration = Duration::from_secs(120);

/// Run `npm install` in the project directory.
pub async fn install_dependencies(dir: &Path) -> Result<()> {
    run_streamed("npm", &["install"], dir, INSTALL_TIMEOUT).await
}

/// Run the `grunt` build in the project directory.
pub async fn run_build(dir: &Path) -> Result<()> {
    run_streamed("grunt", &[], dir, BUILD_TIMEOUT).await
}

/// Spawn a command in `dir`, stream its output, and enforce a timeout.
async fn run_streamed(program: &str, args: &[&str], dir: &Path, limit: Duration) -> Result<()> {
    let display = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };

    println!();
    println!("{} {}", "Running:".dimmed(), display.yellow());
    println!();

    let mut child = TokioCommand::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start '{}' in {}", display, dir.display()))?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    // Stream output until both pipes close
    let output_task = async {
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }
    };

    match timeout(limit, output_task).await {
        Ok(_) => {}
        Err(_) => {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "'{}' timed out after {} seconds.\n\
                 You can run it manually inside {}",
                display,
                limit.as_secs(),
                dir.display()
            );
        }
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                anyhow::bail!(
                    "'{}' failed with exit code: {}\n\
                     You can run it manually inside {}",
                    display,
                    status.code().unwrap_or(-1),
                    dir.display()
                );
            }
        }
        Ok(Err(e)) => {
            anyhow::bail!("Failed to wait for '{}': {}", display, e);
        }
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!(
                "'{}' hung after closing its output. You can run it manually inside {}",
                display,
                dir.display()
            );
        }
    }
}
