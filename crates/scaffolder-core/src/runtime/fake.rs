//! Scriptable `CommandRunner` for tests

use super::command::{CommandRunner, Invocation};
use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// What the fake observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Started(String),
    Finished(String),
}

/// Records invocations instead of running them
///
/// Every command succeeds unless scripted with `fail`. When `npm init -y`
/// succeeds (or always, with `writes_manifest_before_failing`) the fake
/// writes `manifest` (if set) to `package.json`, standing in for the real
/// initializer.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    failures: HashMap<String, i32>,
    manifest: Option<String>,
    manifest_before_failure: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<(Invocation, PathBuf)>>,
    events: Mutex<Vec<Event>>,
}

pub(crate) const NPM_INIT_MANIFEST: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "description": "",
  "main": "index.js",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  },
  "keywords": [],
  "author": "",
  "license": "ISC"
}
"#;

impl RecordingRunner {
    /// A runner whose `npm init -y` writes a typical default manifest
    pub(crate) fn npm_like() -> Self {
        Self::default().writes_manifest(NPM_INIT_MANIFEST)
    }

    pub(crate) fn writes_manifest(mut self, content: &str) -> Self {
        self.manifest = Some(content.to_string());
        self
    }

    /// Write the manifest on `npm init -y` even when it is scripted to fail
    pub(crate) fn writes_manifest_before_failing(mut self) -> Self {
        self.manifest_before_failure = true;
        self
    }

    pub(crate) fn fail(mut self, command: &str, code: i32) -> Self {
        self.failures.insert(command.to_string(), code);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(inv, _)| inv.to_string())
            .collect()
    }

    pub(crate) fn directories(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, dir)| dir.clone())
            .collect()
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation, dir: &Path) -> Result<i32> {
        let command = invocation.to_string();
        self.calls
            .lock()
            .unwrap()
            .push((invocation.clone(), dir.to_path_buf()));
        self.events
            .lock()
            .unwrap()
            .push(Event::Started(command.clone()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let code = self.failures.get(&command).copied().unwrap_or(0);
        let is_npm_init = invocation.program == "npm"
            && invocation.args.first().map(String::as_str) == Some("init");
        if is_npm_init && (code == 0 || self.manifest_before_failure) {
            if let Some(manifest) = &self.manifest {
                std::fs::write(dir.join("package.json"), manifest).unwrap();
            }
        }

        self.events.lock().unwrap().push(Event::Finished(command));
        Ok(code)
    }
}
