//! Locate an IDE launcher on disk.
//!
//! Installers disagree on where launchers go (Toolbox script directories,
//! Homebrew, snap, hand-unpacked tarballs), so resolution walks from the most
//! specific source to the least specific one and never fails: the last resort
//! is the bare identifier, left for the OS to find at spawn time.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

#[cfg(test)]
mod tests;

/// Directories probed after PATH when the config does not list its own.
pub const DEFAULT_SEARCH_DIRS: &[&str] = &[
    "~/.local/share/JetBrains/Toolbox/scripts",
    "~/Library/Application Support/JetBrains/Toolbox/scripts",
    "~/AppData/Local/JetBrains/Toolbox/scripts",
    "~/.local/bin",
    "~/bin",
    "/usr/local/bin",
    "/opt/homebrew/bin",
    "/snap/bin",
    "/var/lib/flatpak/exports/bin",
];

/// Which lookup strategy produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// User override table.
    Override,
    /// The identifier was already an absolute path to an existing file.
    Absolute,
    /// Executable lookup on `PATH`.
    PathLookup,
    /// One of the configured search directories.
    SearchDir,
    /// Nothing matched; the identifier is returned unchanged.
    Fallback,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Override => "override",
            Self::Absolute => "absolute path",
            Self::PathLookup => "PATH",
            Self::SearchDir => "search directory",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// A resolved executable together with the strategy that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path to hand to the process launcher.
    pub path: PathBuf,
    /// Strategy that matched.
    pub source: Source,
}

/// Maps command identifiers to executables.
#[derive(Debug, Clone)]
pub struct Resolver {
    overrides: BTreeMap<String, PathBuf>,
    search_dirs: Vec<String>,
    path_var: Option<OsString>,
}

impl Resolver {
    /// Create a resolver that consults the process `PATH`.
    ///
    /// `search_dirs` may contain `~` and `$VAR` / `${VAR}` references; they are
    /// expanded at lookup time.
    pub fn new(overrides: BTreeMap<String, PathBuf>, search_dirs: Vec<String>) -> Self {
        Self {
            overrides,
            search_dirs,
            path_var: std::env::var_os("PATH"),
        }
    }

    /// Replace the `PATH` value used for executable lookup.
    #[must_use]
    pub fn with_path_var(mut self, path_var: Option<OsString>) -> Self {
        self.path_var = path_var;
        self
    }

    /// Resolve `command_id` to something the launcher can execute.
    pub fn resolve(&self, command_id: &str) -> PathBuf {
        self.resolve_with_source(command_id).path
    }

    /// Like [`Resolver::resolve`], but also reports which strategy matched.
    pub fn resolve_with_source(&self, command_id: &str) -> Resolution {
        let resolution = self.lookup(command_id);
        debug!(
            command_id,
            path = %resolution.path.display(),
            source = %resolution.source,
            "resolved executable"
        );
        resolution
    }

    fn lookup(&self, command_id: &str) -> Resolution {
        if let Some(path) = self.overrides.get(command_id) {
            return Resolution { path: path.clone(), source: Source::Override };
        }

        let as_path = Path::new(command_id);
        if as_path.is_absolute() && as_path.is_file() {
            return Resolution { path: as_path.to_path_buf(), source: Source::Absolute };
        }

        #[cfg(unix)]
        if let Some(path) = self.path_lookup(command_id) {
            return Resolution { path, source: Source::PathLookup };
        }

        if let Some(path) = self.search_dir_lookup(command_id) {
            return Resolution { path, source: Source::SearchDir };
        }

        Resolution { path: PathBuf::from(command_id), source: Source::Fallback }
    }

    #[cfg(unix)]
    fn path_lookup(&self, command_id: &str) -> Option<PathBuf> {
        if command_id.is_empty() {
            return None;
        }
        let cwd = std::env::current_dir().ok()?;
        match which::which_in(command_id, self.path_var.as_ref(), cwd) {
            Ok(found) if !found.as_os_str().is_empty() && found.exists() => Some(found),
            Ok(_) => None,
            Err(e) => {
                debug!(command_id, "not on PATH: {e}");
                None
            }
        }
    }

    fn search_dir_lookup(&self, command_id: &str) -> Option<PathBuf> {
        if command_id.is_empty() {
            return None;
        }
        self.search_dirs.iter().find_map(|dir| {
            let expanded = match shellexpand::full(dir) {
                Ok(expanded) => expanded,
                Err(e) => {
                    debug!(dir = %dir, "skipping search directory: {e}");
                    return None;
                }
            };
            let candidate = Path::new(expanded.as_ref()).join(command_id);
            candidate.exists().then_some(candidate)
        })
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(
            BTreeMap::new(),
            DEFAULT_SEARCH_DIRS.iter().map(ToString::to_string).collect(),
        )
    }
}
