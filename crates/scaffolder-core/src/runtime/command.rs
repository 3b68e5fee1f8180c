//! Blocking-style execution of external tools
//!
//! Commands are awaited to completion before the caller moves on. No timeout
//! is applied: a tool that never exits keeps the scaffolder waiting.

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Exit status reported when a child was terminated without one (e.g., by a signal)
const NO_STATUS_EXIT_CODE: i32 = 1;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a command in a directory and reports its exit status
///
/// Implementations must inherit the caller's stdin, stdout and stderr and
/// must not return before the command has finished.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `invocation` in `dir`, returning the exit status
    ///
    /// `Err` means the command could not be started; a started command that
    /// fails is reported through the returned status.
    async fn run(&self, invocation: &Invocation, dir: &Path) -> Result<i32>;
}

/// Runs real processes via tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation, dir: &Path) -> Result<i32> {
        let status = TokioCommand::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        Ok(status.code().unwrap_or(NO_STATUS_EXIT_CODE))
    }
}

/// Run a command and turn a non-zero status into `ScaffoldError::CommandFailed`
pub async fn ensure_success<R: CommandRunner>(
    runner: &R,
    invocation: &Invocation,
    dir: &Path,
) -> Result<()> {
    match runner.run(invocation, dir).await? {
        0 => Ok(()),
        code => Err(ScaffoldError::CommandFailed {
            command: invocation.to_string(),
            code,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        let inv = Invocation::new("npm", ["install", "--save-dev", "jest"]);
        assert_eq!(inv.to_string(), "npm install --save-dev jest");

        let bare = Invocation::new("git", Vec::<String>::new());
        assert_eq!(bare.to_string(), "git");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();

        let ok = Invocation::new("sh", ["-c", "exit 0"]);
        assert_eq!(SystemRunner.run(&ok, dir.path()).await.unwrap(), 0);

        let failing = Invocation::new("sh", ["-c", "exit 3"]);
        assert_eq!(SystemRunner.run(&failing, dir.path()).await.unwrap(), 3);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new("sh", ["-c", "touch marker"]);

        SystemRunner.run(&inv, dir.path()).await.unwrap();

        assert!(dir.path().join("marker").exists());
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new("definitely-not-a-real-program-4f1c", ["init"]);

        let err = SystemRunner.run(&inv, dir.path()).await.unwrap_err();

        assert!(matches!(err, ScaffoldError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ensure_success_maps_non_zero_status() {
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new("sh", ["-c", "exit 42"]);

        let err = ensure_success(&SystemRunner, &inv, dir.path())
            .await
            .unwrap_err();

        match err {
            ScaffoldError::CommandFailed { command, code } => {
                assert_eq!(command, "sh -c exit 42");
                assert_eq!(code, 42);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
