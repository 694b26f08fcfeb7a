use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("executable not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("missing execute permission: {}", path.display())]
    NotExecutable { path: PathBuf },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command `{cmd}` exited with {status}: {stderr}")]
    ExitStatus {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code of a command that ran but failed, if the OS reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitStatus { status, .. } => status.code(),
            _ => None,
        }
    }
}
