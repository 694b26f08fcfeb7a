use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Archive family an input is routed to.
///
/// Families are not single file formats: `.cbr` and `.cb7` comic books share
/// the RAR and 7z containers under a different customary extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatClass {
    Zip,
    Rar,
    SevenZip,
}

/// Extension table, lowercase with the leading dot.
pub const SUPPORTED_EXTENSIONS: &[(&str, FormatClass)] = &[
    (".zip", FormatClass::Zip),
    (".zipx", FormatClass::Zip),
    (".rar", FormatClass::Rar),
    (".cbr", FormatClass::Rar),
    (".7z", FormatClass::SevenZip),
    (".cb7", FormatClass::SevenZip),
];

impl FormatClass {
    /// Look up an extension, with or without its leading dot, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let lowered = extension.to_lowercase();
        let dotted = if lowered.starts_with('.') {
            lowered
        } else {
            format!(".{lowered}")
        };
        SUPPORTED_EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == dotted)
            .map(|(_, format)| *format)
    }

    /// Classify a path by its extension alone; the file is never opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        Self::from_extension(&extension).ok_or(Error::UnsupportedFormat { extension })
    }

    pub fn extensions(self) -> impl Iterator<Item = &'static str> {
        SUPPORTED_EXTENSIONS
            .iter()
            .filter(move |(_, format)| *format == self)
            .map(|(ext, _)| *ext)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZip => "7z",
        }
    }
}

impl fmt::Display for FormatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extension of the final path component including its dot, or an empty
/// string. Names with only a leading dot (`.zip`) have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
