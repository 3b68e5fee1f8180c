//! Files written into a new project
//!
//! This module provides:
//! - Source templates rendered from the project name (`src/`)
//! - Static build configuration for webpack, jest and git (project root)
//! - Writing a file set to disk

pub mod build;
pub mod source;

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub use build::build_files;
pub use source::source_files;

/// A file to write, relative to some base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub contents: String,
}

impl TemplateFile {
    pub fn new(path: &'static str, contents: impl Into<String>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }
}

/// Write every file under `base`, overwriting whatever is there
///
/// Returns the written paths in order.
pub async fn write_files(base: &Path, files: &[TemplateFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = base.join(file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .map_err(|e| ScaffoldError::io(&target_path, e))?;

        written.push(target_path);
    }

    Ok(written)
}
