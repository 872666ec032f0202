//! Project-root discovery.
//!
//! A root is found by asking a list of probes in priority order and taking the
//! first answer. Probes that need an external tool simply return `None` when
//! the tool is missing.

mod probe;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use probe::{CwdProbe, MarkerProbe, VcsProbe};

/// Markers that identify a project directory when no VCS root is found.
pub const DEFAULT_MARKERS: &[&str] = &[".idea", ".git", ".hg", ".jj", ".svn", ".projectile", ".project"];

/// One way of finding the project a path belongs to.
pub trait RootProbe {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Return the project root for `start`, if this probe can tell.
    fn discover(&self, start: &Path) -> Option<PathBuf>;
}

/// Ask each probe in turn and return the first directory found.
pub fn discover_root(probes: &[Box<dyn RootProbe>], start: &Path) -> Option<PathBuf> {
    for probe in probes {
        match probe.discover(start) {
            Some(root) if root.is_dir() => {
                debug!(probe = probe.name(), root = %root.display(), "found project root");
                return Some(root);
            }
            Some(root) => {
                debug!(probe = probe.name(), root = %root.display(), "ignoring non-directory root");
            }
            None => debug!(probe = probe.name(), start = %start.display(), "no project root"),
        }
    }
    None
}

/// The probes used by the CLI: VCS, then markers, then (optionally) the
/// working directory.
pub fn default_probes(markers: &[String], fallback_to_cwd: bool) -> Vec<Box<dyn RootProbe>> {
    let mut probes: Vec<Box<dyn RootProbe>> = vec![
        Box::new(VcsProbe),
        Box::new(MarkerProbe::new(markers.to_vec())),
    ];
    if fallback_to_cwd {
        probes.push(Box::new(CwdProbe));
    }
    probes
}
