//! Per-format decoders and the shared list-then-filter pipeline.
//!
//! Every decoder writes the whole archive first and then reports its member
//! names. Listings differ per format (ZIP and RAR list directory entries
//! explicitly, 7z may not), so the result is always rebuilt from the
//! filesystem: a member is reported only when it exists as a regular file.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::format::FormatClass;
use crate::sanitize::resolve_member;

mod rar;
mod sevenz;
mod zip;

pub use self::rar::RarDecoder;
pub use self::sevenz::SevenZipDecoder;
pub use self::zip::ZipDecoder;

/// Decoder bound to one opened archive.
pub trait ArchiveDecoder {
    fn format(&self) -> FormatClass;

    /// Write every member below `destination`, creating directories as needed.
    fn extract_all(&mut self, destination: &Path) -> Result<()>;

    /// Member names in archive order, as the decoder reports them.
    fn member_names(&mut self) -> Result<Vec<String>>;
}

/// Extraction results.
pub struct Extracted {
    pub member_count: usize,
    pub files: Vec<PathBuf>,
}

/// Main extraction pipeline.
///
/// An empty `destination` means the current directory; returned paths then
/// stay relative.
pub fn extract_with<D: ArchiveDecoder + ?Sized>(
    decoder: &mut D,
    destination: &Path,
) -> Result<Extracted> {
    let target = if destination.as_os_str().is_empty() {
        Path::new(".")
    } else {
        destination
    };

    decoder.extract_all(target)?;
    let names = decoder.member_names()?;
    let files = collect_files(destination, &names);

    Ok(Extracted {
        member_count: names.len(),
        files,
    })
}

/// Keep the members that now exist as regular files under `destination`.
pub fn collect_files(destination: &Path, names: &[String]) -> Vec<PathBuf> {
    names
        .iter()
        .filter_map(|name| {
            let Some(path) = resolve_member(destination, name) else {
                warn!(member = %name, "skipping member outside the output directory");
                return None;
            };
            path.is_file().then_some(path)
        })
        .collect()
}
