use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One extraction call: the archive and where to put its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
}

impl ArchiveRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: None,
        }
    }

    pub fn destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination = Some(dir.into());
        self
    }

    /// The explicit destination, or the archive's parent directory when the
    /// destination is absent or empty.
    pub fn output_dir(&self) -> PathBuf {
        match self.explicit_destination() {
            Some(dir) => dir.to_path_buf(),
            None => self
                .source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Check the source is a regular file, then that an explicit destination
    /// is an existing directory.
    pub fn validate(&self) -> Result<()> {
        if !self.source.is_file() {
            return Err(Error::NotAFile(self.source.clone()));
        }
        if let Some(dir) = self.explicit_destination() {
            if !dir.is_dir() {
                return Err(Error::NoSuchOutputDir(dir.to_path_buf()));
            }
        }
        Ok(())
    }

    fn explicit_destination(&self) -> Option<&Path> {
        self.destination
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}
