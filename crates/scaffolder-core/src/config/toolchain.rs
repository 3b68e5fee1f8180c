//! External tools used during scaffolding

use crate::runtime::command::Invocation;

/// Build tooling installed as dev dependencies, in install order
pub const DEV_DEPENDENCIES: &[&str] = &[
    "webpack",
    "webpack-cli",
    "webpack-merge",
    "style-loader",
    "css-loader",
    "html-loader",
    "html-webpack-plugin",
    "webpack-dev-server",
    "terser-webpack-plugin",
    "jest",
    "babel-loader",
    "eslint",
    "prettier",
];

/// Programs and arguments for the three external steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Version control binary (e.g., "git")
    pub vcs: &'static str,
    /// Package manager binary (e.g., "npm")
    pub package_manager: &'static str,
    /// Packages passed to the dev-dependency install
    pub dev_dependencies: &'static [&'static str],
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            vcs: "git",
            package_manager: "npm",
            dev_dependencies: DEV_DEPENDENCIES,
        }
    }
}

impl Toolchain {
    /// `git init`
    pub fn vcs_init(&self) -> Invocation {
        Invocation::new(self.vcs, ["init"])
    }

    /// `npm init -y`
    pub fn manifest_init(&self) -> Invocation {
        Invocation::new(self.package_manager, ["init", "-y"])
    }

    /// `npm install --save-dev <dev dependencies>`
    pub fn install_dev_dependencies(&self) -> Invocation {
        Invocation::new(
            self.package_manager,
            ["install", "--save-dev"]
                .into_iter()
                .chain(self.dev_dependencies.iter().copied()),
        )
    }
}
