//! Assembling the IDE command line and starting it in the background.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::JumpError;


/// A fully assembled IDE command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Executable to start.
    pub program: PathBuf,
    /// Arguments after the executable.
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// Build the command line for opening `file_path` at `line`/`column`
    /// inside `project_root`.
    ///
    /// The project root goes first: IDEs pick the window to reuse from the
    /// first positional argument. Either group is dropped when its path does
    /// not exist. A `line` of 0 is clamped to 1.
    pub fn build(
        program: impl Into<PathBuf>,
        project_root: Option<&Path>,
        file_path: Option<&Path>,
        line: u32,
        column: u32,
    ) -> Self {
        let mut args: Vec<OsString> = Vec::new();

        if let Some(root) = project_root.filter(|p| p.is_dir()) {
            args.push(absolute(root).into_os_string());
        }

        if let Some(file) = file_path.filter(|p| p.is_file()) {
            args.push("--line".into());
            args.push(line.max(1).to_string().into());
            args.push("--column".into());
            args.push(column.to_string().into());
            args.push(absolute(file).into_os_string());
        }

        Self { program: program.into(), args }
    }

    /// Render the command line for logs and `--dry-run` output.
    ///
    /// Arguments containing whitespace are double-quoted.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Start the IDE in the background and return its pid.
    ///
    /// The child is not waited on and its handle is dropped; stdio goes to
    /// the null device so the IDE never holds the caller's terminal.
    pub fn spawn(&self) -> Result<u32, JumpError> {
        info!(command = %self.display_line(), "launching IDE");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = cmd.spawn().map_err(|source| JumpError::LaunchFailure {
            program: self.program.clone(),
            source,
        })?;
        Ok(child.id())
    }
}

/// `path` joined onto the working directory when relative. Symlinks are kept.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.into_owned()
    }
}
