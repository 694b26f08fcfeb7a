use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ::zip::ZipArchive;
use ::zip::result::ZipError;

use crate::error::{Error, Result};
use crate::extract::ArchiveDecoder;
use crate::format::FormatClass;

pub struct ZipDecoder {
    archive: ZipArchive<BufReader<File>>,
    path: PathBuf,
}

impl ZipDecoder {
    /// Open and parse the central directory. A malformed archive fails here,
    /// before anything is written.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::ExtractionFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| Error::format(FormatClass::Zip, path, e))?;
        Ok(Self {
            archive,
            path: path.to_path_buf(),
        })
    }

    fn map_error(&self, destination: &Path, err: ZipError) -> Error {
        match err {
            ZipError::Io(source) => Error::ExtractionFailed {
                path: destination.to_path_buf(),
                source,
            },
            other => Error::format(FormatClass::Zip, &self.path, other),
        }
    }
}

impl ArchiveDecoder for ZipDecoder {
    fn format(&self) -> FormatClass {
        FormatClass::Zip
    }

    fn extract_all(&mut self, destination: &Path) -> Result<()> {
        match self.archive.extract(destination) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.map_error(destination, e)),
        }
    }

    fn member_names(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let file = self
                .archive
                .by_index_raw(i)
                .map_err(|e| Error::format(FormatClass::Zip, &self.path, e))?;
            names.push(file.name().to_string());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ::zip::ZipWriter;
    use ::zip::write::SimpleFileOptions;

    use super::*;
    use crate::ErrorKind;

    fn write_zip(path: &Path) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default();
        writer.add_directory("docs/", options).unwrap();
        writer.start_file("docs/readme.txt", options).unwrap();
        writer.write_all(b"Hello from ZIP!").unwrap();
        writer.start_file("cover.jpg", options).unwrap();
        writer.write_all(b"jpeg").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn member_names_in_archive_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.zip");
        write_zip(&path);

        let mut decoder = ZipDecoder::open(&path).unwrap();
        assert_eq!(
            decoder.member_names().unwrap(),
            ["docs/", "docs/readme.txt", "cover.jpg"]
        );
    }

    #[test]
    fn extract_all_writes_members() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.zip");
        let dest = dir.path().join("output");
        std::fs::create_dir(&dest).unwrap();
        write_zip(&path);

        let mut decoder = ZipDecoder::open(&path).unwrap();
        decoder.extract_all(&dest).unwrap();

        assert!(dest.join("docs").is_dir());
        let content = std::fs::read_to_string(dest.join("docs/readme.txt")).unwrap();
        assert_eq!(content, "Hello from ZIP!");
    }

    #[test]
    fn garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"this is not a zip archive, only plain text padding").unwrap();

        let err = ZipDecoder::open(&path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
