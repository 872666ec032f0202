use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::RootProbe;

/// Asks git for the top of the working tree.
pub struct VcsProbe;

impl RootProbe for VcsProbe {
    fn name(&self) -> &str {
        "git"
    }

    fn discover(&self, start: &Path) -> Option<PathBuf> {
        let output = Command::new("git")
            .arg("-C")
            .arg(start)
            .args(["rev-parse", "--show-toplevel"])
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }
        // Output looks like "/home/u/proj\n"
        let top = String::from_utf8_lossy(&output.stdout);
        let top = top.trim();
        (!top.is_empty()).then(|| PathBuf::from(top))
    }
}

/// Walks up from the start directory looking for marker entries such as
/// `.idea` or `.projectile`.
pub struct MarkerProbe {
    markers: Vec<String>,
}

impl MarkerProbe {
    /// Probe for any of `markers`.
    pub const fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

impl RootProbe for MarkerProbe {
    fn name(&self) -> &str {
        "markers"
    }

    fn discover(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.markers.iter().any(|m| dir.join(m).exists()))
            .map(Path::to_path_buf)
    }
}

/// The process working directory.
pub struct CwdProbe;

impl RootProbe for CwdProbe {
    fn name(&self) -> &str {
        "cwd"
    }

    fn discover(&self, _start: &Path) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}
