use std::path::PathBuf;

use crate::format::FormatClass;

/// Outcome of one extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionReport {
    pub format: FormatClass,
    pub output_dir: PathBuf,
    /// Members the decoder listed, directories included.
    pub member_count: usize,
    /// Extracted regular files in archive-listing order.
    pub files: Vec<PathBuf>,
}

impl ExtractionReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Listed members that did not end up as regular files (directory entries).
    pub fn skipped(&self) -> usize {
        self.member_count.saturating_sub(self.files.len())
    }

    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}
