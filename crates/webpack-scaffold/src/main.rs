//! webpack-scaffold - Project scaffolding for webpack front-end projects

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ScaffoldError, SystemRunner};

/// Webpack product configuration
#[derive(Clone)]
pub struct WebpackConfig;

impl ProductConfig for WebpackConfig {
    fn name(&self) -> &'static str {
        "webpack-scaffold"
    }

    fn display_name(&self) -> &'static str {
        "webpack scaffold"
    }

    fn next_steps(&self, project_name: &str) -> Vec<String> {
        vec![format!("cd {}", project_name), "npm start".to_string()]
    }
}

#[derive(Parser, Debug)]
#[command(name = "webpack-scaffold")]
#[command(about = "CLI for scaffolding webpack front-end projects")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    #[arg(allow_hyphen_values = true)]
    pub project_name: Option<String>,

    /// Anything after the project name is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub _ignored: Vec<String>,
}

/// Exit status for an argument error
///
/// Help and version requests succeed; anything else clap rejects (such as a
/// name that is not valid UTF-8) counts as a missing project name.
fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Exit status for a failed run
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ScaffoldError>()
        .map_or(1, ScaffoldError::exit_code)
}

async fn run(args: Args) -> Result<()> {
    let config = WebpackConfig;

    let Some(project_name) = args.project_name.filter(|name| !name.is_empty()) else {
        eprintln!(
            "{} {}: {}",
            "error:".red().bold(),
            ScaffoldError::MissingProjectName,
            config.usage()
        );
        return Err(ScaffoldError::MissingProjectName.into());
    };

    let parent_dir = std::env::current_dir()?;
    let create_args = CreateArgs::new(Some(project_name), parent_dir);
    scaffolder_core::run(&config, create_args, SystemRunner).await?;

    Ok(())
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

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(e.kind()));
        }
    };

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            // Scaffold errors were already shown to the user
            if e.downcast_ref::<ScaffoldError>().is_none() {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            exit_code(&e)
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(code);
}
