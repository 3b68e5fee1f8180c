//! Project directory layout

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Source directory, relative to the project root
pub const SRC_DIR: &str = "src";
/// Build output directory, relative to the project root
pub const DIST_DIR: &str = "dist";
/// Package manifest written by the package manager
pub const MANIFEST_FILE: &str = "package.json";

/// Paths of a project being scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Layout for project `name` created under `parent`
    pub fn new(parent: &Path, name: &str) -> Self {
        Self {
            root: parent.join(name),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    pub fn dist(&self) -> PathBuf {
        self.root.join(DIST_DIR)
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Create the root, `src` and `dist` directories
    ///
    /// Refuses to touch an existing root. Missing parent segments are created.
    pub async fn create(&self) -> Result<()> {
        if self.root.exists() {
            return Err(ScaffoldError::ProjectExists {
                path: self.root.clone(),
            });
        }

        for dir in [self.root.clone(), self.src(), self.dist()] {
            fs::create_dir_all(&dir)
                .await
                .map_err(|e| ScaffoldError::io(&dir, e))?;
        }

        Ok(())
    }
}
