//! Errors a jump can end in.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a jump can end in. Each one is reported once and never retried.
#[derive(Debug, Error)]
pub enum JumpError {
    /// The editor had no file to hand over, or the file is gone.
    #[error("no file is associated with the current buffer")]
    NoFileContext,

    /// None of the project-root probes produced a directory.
    #[error("could not find a project root")]
    NoProjectRoot,

    /// The OS refused to start the IDE process.
    #[error("failed to launch {}", program.display())]
    LaunchFailure {
        /// Executable we tried to start.
        program: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },
}
