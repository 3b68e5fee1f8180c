//! Package manifest read-modify-write
//!
//! The manifest is whatever the package manager's initializer produced. It is
//! kept as an ordered JSON object so fields this crate does not know about
//! survive the rewrite in their original order.

use crate::error::{Result, ScaffoldError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;

/// Value of the `type` field marking the package as native ES modules
pub const MODULE_TYPE: &str = "module";

const SCRIPTS_KEY: &str = "scripts";
const TYPE_KEY: &str = "type";

/// npm scripts added to every scaffolded project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldScripts {
    pub test: &'static str,
    pub start: &'static str,
    pub build: &'static str,
    pub deploy: &'static str,
    pub lint: &'static str,
    #[serde(rename = "lint-fix")]
    pub lint_fix: &'static str,
    pub format: &'static str,
}

impl Default for ScaffoldScripts {
    fn default() -> Self {
        Self {
            test: "node --experimental-vm-modules ./node_modules/.bin/jest",
            start: "webpack serve --config webpack.dev.js --mode development",
            build: "webpack --config webpack.prod.js --mode production",
            deploy: "git subtree push --prefix dist origin gh-pages",
            lint: "eslint 'src/**/*.{js,jsx}'",
            lint_fix: "eslint 'src/**/*.{js,jsx}' --fix",
            format: "prettier --write 'src/**/*.{js,jsx,css,html}'",
        }
    }
}

/// An in-memory `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl FromStr for PackageManifest {
    type Err = serde_json::Error;

    /// Parse a manifest; anything but a top-level JSON object is rejected
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self {
            fields: serde_json::from_str(s)?,
        })
    }
}

impl PackageManifest {
    /// Read and parse the manifest at `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ScaffoldError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;

        content
            .parse()
            .map_err(|source| ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Rewrite the whole manifest at `path`
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        fs::write(path, content)
            .await
            .map_err(|e| ScaffoldError::io(path, e))
    }

    /// Two-space indented JSON with a trailing newline, fields in document order
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.fields).map_err(ScaffoldError::ManifestSerialize)?;
        content.push('\n');
        Ok(content)
    }

    /// Merge `scripts` into the `scripts` object
    ///
    /// Existing entries are kept; on a name collision the new command wins.
    /// `scripts` must serialize to a JSON object of strings or other values.
    pub fn merge_scripts<S: Serialize>(&mut self, scripts: &S) -> Result<()> {
        let additions = serde_json::to_value(scripts).map_err(ScaffoldError::ManifestSerialize)?;
        let additions = match additions {
            Value::Object(map) => map,
            other => {
                return Err(ScaffoldError::ManifestShape {
                    reason: format!("script table must be an object, got {}", other),
                })
            }
        };

        let existing = self
            .fields
            .entry(SCRIPTS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if existing.is_null() {
            *existing = Value::Object(Map::new());
        }

        let Value::Object(current) = existing else {
            return Err(ScaffoldError::ManifestShape {
                reason: format!("\"{}\" is not an object", SCRIPTS_KEY),
            });
        };

        for (name, command) in additions {
            current.insert(name, command);
        }

        Ok(())
    }

    /// Set `"type": "module"`
    pub fn set_module_type(&mut self) {
        self.fields
            .insert(TYPE_KEY.to_string(), Value::String(MODULE_TYPE.to_string()));
    }

    /// Add the scaffold scripts and mark the package as an ES module
    pub fn augment(&mut self, scripts: &ScaffoldScripts) -> Result<()> {
        self.merge_scripts(scripts)?;
        self.set_module_type();
        Ok(())
    }

    /// Command for a named script, if present
    pub fn script(&self, name: &str) -> Option<&str> {
        self.fields.get(SCRIPTS_KEY)?.get(name)?.as_str()
    }

    /// Value of the `type` field
    pub fn module_type(&self) -> Option<&str> {
        self.fields.get(TYPE_KEY)?.as_str()
    }
}
