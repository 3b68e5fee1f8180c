//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to give the shared scaffolding workflow its
//! identity and toolchain.

use crate::config::Toolchain;

/// Configuration trait for scaffolding products
///
/// Each product defines:
/// - Product identity (name, display name)
/// - The external toolchain it drives
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Programs run during scaffolding
    fn toolchain(&self) -> Toolchain {
        Toolchain::default()
    }

    /// Usage line shown when the project name is missing
    fn usage(&self) -> String {
        format!("{} <project-name>", self.name())
    }

    /// The "next steps" instructions after project creation
    fn next_steps(&self, project_name: &str) -> Vec<String>;
}
