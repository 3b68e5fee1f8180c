//! The scaffold workflow
//!
//! A single linear pass: directories, source templates, `git init`,
//! `npm init -y`, manifest augmentation, dev-dependency install, build config.
//! Each step finishes before the next starts. The first failure ends the run
//! and nothing already written is undone.

use crate::config::Toolchain;
use crate::error::{Result, ScaffoldError};
use crate::layout::ProjectLayout;
use crate::manifest::{PackageManifest, ScaffoldScripts};
use crate::runtime::command::{ensure_success, CommandRunner, Invocation};
use crate::templates::{self, build_files, source_files};
use std::fmt;
use std::path::{Path, PathBuf};

/// Workflow steps, reported to the observer just before each one runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateDirectories,
    WriteSources,
    InitRepository,
    InitManifest,
    AugmentManifest,
    InstallDependencies,
    WriteBuildConfig,
}

impl Step {
    pub fn description(&self) -> &'static str {
        match self {
            Step::CreateDirectories => "Creating project directories",
            Step::WriteSources => "Writing source templates",
            Step::InitRepository => "Initializing git repository",
            Step::InitManifest => "Creating package.json",
            Step::AugmentManifest => "Adding scripts to package.json",
            Step::InstallDependencies => "Installing build dependencies",
            Step::WriteBuildConfig => "Writing build configuration",
        }
    }

    /// The external command this step hands the terminal to, if any
    pub fn invocation(&self, toolchain: &Toolchain) -> Option<Invocation> {
        match self {
            Step::InitRepository => Some(toolchain.vcs_init()),
            Step::InitManifest => Some(toolchain.manifest_init()),
            Step::InstallDependencies => Some(toolchain.install_dev_dependencies()),
            Step::CreateDirectories
            | Step::WriteSources
            | Step::AugmentManifest
            | Step::WriteBuildConfig => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub layout: ProjectLayout,
    /// Files written by the scaffolder itself (not by external tools), in order
    pub files: Vec<PathBuf>,
}

/// Runs the scaffold workflow against a `CommandRunner`
pub struct Scaffolder<R> {
    runner: R,
    toolchain: Toolchain,
    scripts: ScaffoldScripts,
}

impl<R: CommandRunner> Scaffolder<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            toolchain: Toolchain::default(),
            scripts: ScaffoldScripts::default(),
        }
    }

    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Scaffold `project_name` as a new directory under `parent`
    ///
    /// `on_step` is called before each step starts. An empty name fails
    /// before anything is touched.
    pub async fn run<F>(
        &self,
        project_name: &str,
        parent: &Path,
        mut on_step: F,
    ) -> Result<ScaffoldReport>
    where
        F: FnMut(Step),
    {
        if project_name.is_empty() {
            return Err(ScaffoldError::MissingProjectName);
        }

        let layout = ProjectLayout::new(parent, project_name);
        let root = layout.root();
        let mut files = Vec::new();

        on_step(Step::CreateDirectories);
        layout.create().await?;

        on_step(Step::WriteSources);
        files.extend(templates::write_files(&layout.src(), &source_files(project_name)).await?);

        on_step(Step::InitRepository);
        ensure_success(&self.runner, &self.toolchain.vcs_init(), root).await?;

        on_step(Step::InitManifest);
        ensure_success(&self.runner, &self.toolchain.manifest_init(), root).await?;

        on_step(Step::AugmentManifest);
        let manifest_path = layout.manifest();
        let mut manifest = PackageManifest::load(&manifest_path).await?;
        manifest.augment(&self.scripts)?;
        manifest.save(&manifest_path).await?;
        files.push(manifest_path);

        on_step(Step::InstallDependencies);
        ensure_success(
            &self.runner,
            &self.toolchain.install_dev_dependencies(),
            root,
        )
        .await?;

        on_step(Step::WriteBuildConfig);
        files.extend(templates::write_files(root, &build_files()).await?);

        Ok(ScaffoldReport {
            project_name: project_name.to_string(),
            layout,
            files,
        })
    }
}
