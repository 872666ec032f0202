//! Turning editor state into a launched IDE.


use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::JumpError;
use crate::launcher::{absolute, LaunchCommand};
use crate::project::{discover_root, RootProbe};
use crate::resolver::Resolver;

/// Everything needed to open one location in an IDE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpRequest {
    /// Command identifier of the IDE.
    pub command_id: String,
    /// Project window to reuse.
    pub project_root: Option<PathBuf>,
    /// File to open.
    pub file_path: Option<PathBuf>,
    /// 1-based line.
    pub line: u32,
    /// 0-based column.
    pub column: u32,
}

/// Builds requests and command lines from a resolver and project probes.
pub struct Jumper<'a> {
    resolver: &'a Resolver,
    probes: &'a [Box<dyn RootProbe>],
}

impl<'a> Jumper<'a> {
    /// Create a jumper.
    pub const fn new(resolver: &'a Resolver, probes: &'a [Box<dyn RootProbe>]) -> Self {
        Self { resolver, probes }
    }

    /// Request for opening `file` at `line`/`column`.
    ///
    /// The project root comes first: an explicit `project` directory is used
    /// as-is, otherwise it is discovered from the file's directory (the
    /// working directory when there is no file). No root means no launch.
    pub fn file_request(
        &self,
        command_id: &str,
        file: Option<&Path>,
        line: u32,
        column: u32,
        project: Option<&Path>,
    ) -> Result<JumpRequest, JumpError> {
        let project_root = explicit_root(project)
            .or_else(|| {
                let start = file
                    .map(absolute)
                    .and_then(|f| f.parent().map(Path::to_path_buf))
                    .filter(|dir| dir.is_dir())
                    .or_else(|| std::env::current_dir().ok())?;
                discover_root(self.probes, &start)
            })
            .ok_or(JumpError::NoProjectRoot)?;

        let file = file
            .filter(|f| f.is_file())
            .map(absolute)
            .ok_or(JumpError::NoFileContext)?;

        Ok(JumpRequest {
            command_id: command_id.to_string(),
            project_root: Some(project_root),
            file_path: Some(file),
            line: line.max(1),
            column,
        })
    }

    /// Request for opening just the project containing `start` (a file or
    /// directory; the working directory when `None`).
    pub fn project_request(
        &self,
        command_id: &str,
        start: Option<&Path>,
    ) -> Result<JumpRequest, JumpError> {
        let start = match start {
            Some(p) if p.is_file() => p.parent().map(absolute),
            Some(p) if p.is_dir() => Some(absolute(p)),
            Some(_) => None,
            None => std::env::current_dir().ok(),
        };

        let project_root = start
            .and_then(|dir| discover_root(self.probes, &dir))
            .ok_or(JumpError::NoProjectRoot)?;

        Ok(JumpRequest {
            command_id: command_id.to_string(),
            project_root: Some(project_root),
            file_path: None,
            line: 1,
            column: 0,
        })
    }

    /// Resolve the IDE executable and assemble the command line.
    pub fn command(&self, request: &JumpRequest) -> LaunchCommand {
        let program = self.resolver.resolve(&request.command_id);
        debug!(?request, "building launch command");
        LaunchCommand::build(
            program,
            request.project_root.as_deref(),
            request.file_path.as_deref(),
            request.line,
            request.column,
        )
    }

    /// Build and spawn in one step. Returns the child pid.
    pub fn launch(&self, request: &JumpRequest) -> Result<u32, JumpError> {
        self.command(request).spawn()
    }
}

fn explicit_root(project: Option<&Path>) -> Option<PathBuf> {
    let dir = project?;
    if dir.is_dir() {
        return Some(absolute(dir));
    }
    warn!(project = %dir.display(), "project directory does not exist, discovering instead");
    None
}
