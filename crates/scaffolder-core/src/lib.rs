//! Scaffolder Core - Shared library for front-end project scaffolding CLIs
//!
//! This library creates a new webpack project: a directory tree, source
//! templates, a git repository, an augmented `package.json`, installed build
//! tooling and the build configuration files. Binaries supply their identity
//! through `ProductConfig` and drive the workflow, either directly via
//! `Scaffolder` or through the cliclack front end.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Layout creation, template rendering and
//!   writing, manifest merging, external command execution
//! - **Layer 2: Workflow Orchestration** - `Scaffolder`, which runs the steps in
//!   order and reports each one to an observer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based progress output
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress display
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{Scaffolder, SystemRunner};
//!
//! let scaffolder = Scaffolder::new(SystemRunner);
//! let report = scaffolder
//!     .run("my-site", &std::env::current_dir()?, |step| println!("{step}"))
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Toolchain;
pub use error::{Result, ScaffoldError};
pub use layout::ProjectLayout;
pub use manifest::{PackageManifest, ScaffoldScripts};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, Invocation, SystemRunner};
pub use scaffold::{ScaffoldReport, Scaffolder, Step};
pub use templates::TemplateFile;

#[cfg(feature = "tui")]
pub use tui::run;
