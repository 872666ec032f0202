//! The `config.toml` file: IDE table, executable overrides and search settings.

mod ops;


use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ide::{self, IdeTarget, FALLBACK_IDE};
use crate::project::{self, RootProbe, DEFAULT_MARKERS};
use crate::resolver::{Resolver, DEFAULT_SEARCH_DIRS};

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name or command identifier used when `--ide` is not given.
    pub default_ide: String,
    /// Directories searched after `PATH`; `~` and `$VAR` are expanded.
    pub search_dirs: Vec<String>,
    /// Command identifier to executable path, consulted before anything else.
    pub paths: BTreeMap<String, String>,
    /// Project-root discovery settings.
    pub project: ProjectConfig,
    /// IDEs in listing order.
    #[serde(rename = "ide")]
    pub ides: Vec<IdeTarget>,
}

/// `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Use the working directory when no VCS root or marker is found.
    pub fallback_to_cwd: bool,
    /// Entries whose presence marks a directory as a project root.
    pub markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ide: FALLBACK_IDE.to_string(),
            search_dirs: DEFAULT_SEARCH_DIRS.iter().map(ToString::to_string).collect(),
            paths: BTreeMap::new(),
            project: ProjectConfig::default(),
            ides: ide::default_targets(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            fallback_to_cwd: true,
            markers: DEFAULT_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Command identifier for `name`, or for the configured default when
    /// `name` is `None`.
    pub fn command_for<'a>(&'a self, name: Option<&'a str>) -> &'a str {
        let name = name.unwrap_or(self.default_ide.as_str());
        ide::command_for(&self.ides, name)
    }

    /// Resolver over this config's overrides and search directories.
    pub fn resolver(&self) -> Resolver {
        let overrides = self
            .paths
            .iter()
            .map(|(id, path)| (id.clone(), PathBuf::from(path)))
            .collect();
        Resolver::new(overrides, self.search_dirs.clone())
    }

    /// Project-root probes in priority order.
    pub fn probes(&self) -> Vec<Box<dyn RootProbe>> {
        project::default_probes(&self.project.markers, self.project.fallback_to_cwd)
    }
}
