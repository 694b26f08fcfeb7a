use std::path::{Path, PathBuf};

use tracing::debug;
use unarc_platform::{Command, ensure_executable};

use crate::error::{Error, Result};

/// Conventional install location of the `unrar` executable.
pub const DEFAULT_UNRAR_PATH: &str = "/usr/bin/unrar";

/// Validated path to the external `unrar` executable.
///
/// Checked once when built and never changed afterwards, so one value can be
/// shared freely between threads and extractors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RarTool {
    path: PathBuf,
}

impl RarTool {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_executable(&path).map_err(|source| Error::Configuration {
            path: path.clone(),
            source,
        })?;
        debug!(tool = %path.display(), "configured unrar tool");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn command(&self) -> Command {
        Command::new(&self.path)
    }
}
