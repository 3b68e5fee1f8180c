//! Charm-style progress output around the scaffold workflow

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::runtime::command::CommandRunner;
use crate::scaffold::{ScaffoldReport, Scaffolder, Step};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for a create run
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project (and of the directory created for it)
    pub project_name: Option<String>,

    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
}

impl CreateArgs {
    pub fn new(project_name: Option<String>, parent_dir: PathBuf) -> Self {
        Self {
            project_name,
            parent_dir,
        }
    }
}

/// Scaffold a project, showing each step as it starts
///
/// Errors from the workflow are shown to the user before being returned, so
/// callers only need to map them to an exit status.
pub async fn run<C: ProductConfig, R: CommandRunner>(
    config: &C,
    args: CreateArgs,
    runner: R,
) -> Result<ScaffoldReport> {
    let project_name = args.project_name.unwrap_or_default();
    if project_name.is_empty() {
        let _ = cliclack::log::error(format!(
            "{}: {}",
            ScaffoldError::MissingProjectName,
            config.usage()
        ));
        return Err(ScaffoldError::MissingProjectName.into());
    }

    // Terminal output is best-effort from here on: the exit status must come
    // from the scaffold result, never from a failed write to the terminal.
    let _ = cliclack::intro(config.display_name());

    let scaffolder = Scaffolder::new(runner).with_toolchain(config.toolchain());
    let result = scaffolder
        .run(&project_name, &args.parent_dir, |step| show_step(&scaffolder, step))
        .await;

    match result {
        Ok(report) => {
            let _ = cliclack::log::success(format!(
                "Project \"{}\" scaffolded successfully ({} files written)",
                report.project_name,
                report.files.len()
            ));
            print_next_steps(config, &report.project_name);
            Ok(report)
        }
        Err(e) => {
            let _ = cliclack::outro_cancel(e.to_string());
            Err(e.into())
        }
    }
}

fn show_step<R: CommandRunner>(scaffolder: &Scaffolder<R>, step: Step) {
    let _ = match step.invocation(scaffolder.toolchain()) {
        Some(command) => {
            cliclack::log::step(format!("{}\n{}", step, command.to_string().dimmed()))
        }
        None => cliclack::log::step(step.description()),
    };
}

fn print_next_steps<C: ProductConfig>(config: &C, project_name: &str) {
    let steps = config.next_steps(project_name);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    let _ = cliclack::outro("Start coding!");
}
