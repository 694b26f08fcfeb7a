use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use sevenz_rust::{Password, SevenZReader};

use crate::error::{Error, Result};
use crate::extract::ArchiveDecoder;
use crate::format::FormatClass;
use crate::sanitize::escapes_base;

/// In-process 7z decoding.
///
/// Entry names are read from the archive header when opening, so a bad
/// signature or header fails before any member is written. The decoder joins
/// names onto the destination as-is, so names that climb out of it are
/// rejected here too.
pub struct SevenZipDecoder {
    path: PathBuf,
    names: Vec<String>,
}

impl SevenZipDecoder {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::ExtractionFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let len = file.metadata()?.len();

        let reader = SevenZReader::new(BufReader::new(file), len, Password::empty())
            .map_err(|e| Error::format(FormatClass::SevenZip, path, e))?;
        let names: Vec<String> = reader
            .archive()
            .files
            .iter()
            .map(|entry| entry.name().to_string())
            .collect();

        if let Some(name) = names.iter().find(|name| escapes_base(name)) {
            return Err(Error::format(
                FormatClass::SevenZip,
                path,
                format!("member '{name}' escapes the output directory"),
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            names,
        })
    }

    /// Corrupt streams surface as `InvalidData`/`UnexpectedEof` I/O errors
    /// and stay format errors; other I/O failures are about the destination.
    fn map_error(&self, destination: &Path, err: sevenz_rust::Error) -> Error {
        match err {
            sevenz_rust::Error::FileOpen(source, _) => Error::ExtractionFailed {
                path: self.path.clone(),
                source,
            },
            sevenz_rust::Error::Io(source, _)
                if !matches!(
                    source.kind(),
                    io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof
                ) =>
            {
                Error::ExtractionFailed {
                    path: destination.to_path_buf(),
                    source,
                }
            }
            other => Error::format(FormatClass::SevenZip, &self.path, other),
        }
    }
}

impl ArchiveDecoder for SevenZipDecoder {
    fn format(&self) -> FormatClass {
        FormatClass::SevenZip
    }

    fn extract_all(&mut self, destination: &Path) -> Result<()> {
        sevenz_rust::decompress_file(&self.path, destination)
            .map_err(|e| self.map_error(destination, e))
    }

    fn member_names(&mut self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.cb7");
        std::fs::write(&path, b"not a real 7z file").unwrap();

        let err = SevenZipDecoder::open(&path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn truncated_signature_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.7z");
        std::fs::write(&path, b"7z\xbc\xaf\x27\x1c").unwrap();

        let err = SevenZipDecoder::open(&path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn destination_io_errors_are_extraction_failures() {
        let decoder = SevenZipDecoder {
            path: PathBuf::from("pack.7z"),
            names: Vec::new(),
        };
        let denied = sevenz_rust::Error::io(io::Error::from(io::ErrorKind::PermissionDenied));

        let err = decoder.map_error(Path::new("out"), denied);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, Error::ExtractionFailed { path, .. } if path == Path::new("out")));
    }

    #[test]
    fn corrupt_stream_errors_stay_format_errors() {
        let decoder = SevenZipDecoder {
            path: PathBuf::from("pack.7z"),
            names: Vec::new(),
        };
        let corrupt = sevenz_rust::Error::io(io::Error::from(io::ErrorKind::InvalidData));
        assert_eq!(
            decoder.map_error(Path::new("out"), corrupt).kind(),
            ErrorKind::Format
        );
        assert_eq!(
            decoder
                .map_error(Path::new("out"), sevenz_rust::Error::ChecksumVerificationFailed)
                .kind(),
            ErrorKind::Format
        );
    }
}
