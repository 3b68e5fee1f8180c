//! Error taxonomy for a scaffold run
//!
//! Every variant is fatal. Nothing is retried and nothing already written is
//! rolled back, so a failure part-way through leaves a half-scaffolded tree.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scaffold run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No project name (or an empty one) was supplied
    #[error("Please provide a project name")]
    MissingProjectName,

    /// The target project directory already exists
    #[error("Project directory already exists: {}", path.display())]
    ProjectExists { path: PathBuf },

    /// Creating a directory or writing a file failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external command could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An external command ran and exited unsuccessfully
    #[error("`{command}` exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// The manifest could not be read (usually because the initializer did not write one)
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest is not valid JSON
    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest is valid JSON but not shaped like a package manifest
    #[error("Unexpected manifest layout: {reason}")]
    ManifestShape { reason: String },

    /// The augmented manifest could not be serialized
    #[error("Failed to serialize manifest: {0}")]
    ManifestSerialize(#[source] serde_json::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    ///
    /// A failed external command hands its own status through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result alias for scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
