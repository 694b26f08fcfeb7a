use std::io;
use std::path::PathBuf;

use crate::format::FormatClass;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrar tool not usable at '{}': {source}", path.display())]
    Configuration {
        path: PathBuf,
        source: unarc_platform::Error,
    },

    #[error("not a valid archive file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("output directory doesn't exist: {}", .0.display())]
    NoSuchOutputDir(PathBuf),

    #[error("unsupported archive format: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("invalid {format} archive '{}': {reason}", path.display())]
    Format {
        format: FormatClass,
        path: PathBuf,
        reason: String,
    },

    #[error("'{}' failed on '{}': {source}", tool.display(), archive.display())]
    ToolExecution {
        tool: PathBuf,
        archive: PathBuf,
        source: unarc_platform::Error,
    },

    #[error("failed to extract '{}': {source}", path.display())]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Coarse error classification for callers that branch on failure type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    InvalidInput,
    UnsupportedFormat,
    Format,
    ToolExecution,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::NotAFile(_) | Self::NoSuchOutputDir(_) => ErrorKind::InvalidInput,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Format { .. } => ErrorKind::Format,
            Self::ToolExecution { .. } => ErrorKind::ToolExecution,
            Self::ExtractionFailed { .. } | Self::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn format(
        format: FormatClass,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::Format {
            format,
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_variants_share_a_kind() {
        assert_eq!(
            Error::NotAFile(PathBuf::from("a.zip")).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            Error::NoSuchOutputDir(PathBuf::from("out")).kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::NotAFile(PathBuf::from("missing.zip"));
        assert_eq!(err.to_string(), "not a valid archive file: missing.zip");

        let err = Error::UnsupportedFormat {
            extension: ".tar".into(),
        };
        assert_eq!(err.to_string(), "unsupported archive format: '.tar'");
    }

    #[test]
    fn format_error_names_the_family() {
        let err = Error::format(FormatClass::SevenZip, "a.cb7", "bad signature");
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.to_string(), "invalid 7z archive 'a.cb7': bad signature");
    }

    #[test]
    fn io_errors_are_io_kind() {
        let err = Error::from(io::Error::other("disk full"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
