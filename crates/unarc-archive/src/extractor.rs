use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::data::report::ExtractionReport;
use crate::data::request::ArchiveRequest;
use crate::error::Result;
use crate::extract::{
    ArchiveDecoder, Extracted, RarDecoder, SevenZipDecoder, ZipDecoder, extract_with,
};
use crate::format::FormatClass;
use crate::tool::{DEFAULT_UNRAR_PATH, RarTool};

/// Extracts ZIP, RAR and 7z archives, choosing the decoder by file extension.
///
/// Holds no state besides the `unrar` location, so one extractor can serve
/// many calls and threads.
#[derive(Clone, Debug)]
pub struct Extractor {
    rar_tool: RarTool,
}

impl Extractor {
    /// Fails with a configuration error unless `unrar_path` is an executable file.
    pub fn new(unrar_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_tool(RarTool::new(unrar_path)?))
    }

    /// Use `unrar` from its conventional install location.
    pub fn with_default_tool() -> Result<Self> {
        Self::new(DEFAULT_UNRAR_PATH)
    }

    pub fn with_tool(rar_tool: RarTool) -> Self {
        Self { rar_tool }
    }

    pub fn rar_tool(&self) -> &RarTool {
        &self.rar_tool
    }

    /// Extract `archive_path` into `output_dir` (or next to the archive) and
    /// return the extracted regular files in archive order.
    pub fn extract(
        &self,
        archive_path: impl AsRef<Path>,
        output_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let mut request = ArchiveRequest::new(archive_path.as_ref());
        if let Some(dir) = output_dir {
            request = request.destination(dir);
        }
        self.extract_request(&request)
    }

    pub fn extract_request(&self, request: &ArchiveRequest) -> Result<Vec<PathBuf>> {
        self.extract_report(request).map(ExtractionReport::into_files)
    }

    /// Validate, classify, decode, then keep the members that are regular files.
    pub fn extract_report(&self, request: &ArchiveRequest) -> Result<ExtractionReport> {
        request.validate()?;

        let source = request.source.as_path();
        let output_dir = request.output_dir();
        let format = FormatClass::from_path(source)?;
        debug!(archive = %source.display(), %format, "classified archive");

        let extracted = match format {
            FormatClass::Zip => run(&mut ZipDecoder::open(source)?, &output_dir)?,
            FormatClass::Rar => run(&mut RarDecoder::open(source, &self.rar_tool)?, &output_dir)?,
            FormatClass::SevenZip => run(&mut SevenZipDecoder::open(source)?, &output_dir)?,
        };

        info!(
            archive = %source.display(),
            %format,
            members = extracted.member_count,
            files = extracted.files.len(),
            "extracted archive"
        );

        Ok(ExtractionReport {
            format,
            output_dir,
            member_count: extracted.member_count,
            files: extracted.files,
        })
    }
}

fn run<D: ArchiveDecoder>(decoder: &mut D, output_dir: &Path) -> Result<Extracted> {
    debug!(format = %decoder.format(), dest = %output_dir.display(), "decoding");
    extract_with(decoder, output_dir)
}
