use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::extract::ArchiveDecoder;
use crate::format::FormatClass;
use crate::tool::RarTool;

const RAR4_SIGNATURE: &[u8] = b"Rar!\x1a\x07\x00";
const RAR5_SIGNATURE: &[u8] = b"Rar!\x1a\x07\x01\x00";

/// `unrar` exit code for CRC errors and damaged archives.
const UNRAR_EXIT_DAMAGED: i32 = 3;

/// RAR decoding through the external `unrar` executable.
///
/// Only the signature is checked in-process; decompression and listing are
/// done by the tool (`x` and `lb` commands).
pub struct RarDecoder<'a> {
    path: PathBuf,
    tool: &'a RarTool,
}

impl<'a> RarDecoder<'a> {
    pub fn open(path: &Path, tool: &'a RarTool) -> Result<Self> {
        let mut header = Vec::with_capacity(RAR5_SIGNATURE.len());
        File::open(path)
            .and_then(|file| file.take(RAR5_SIGNATURE.len() as u64).read_to_end(&mut header))
            .map_err(|e| Error::ExtractionFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !has_rar_signature(&header) {
            return Err(Error::format(
                FormatClass::Rar,
                path,
                "missing RAR signature",
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            tool,
        })
    }

    /// A damaged archive is the input's fault; anything else is the tool's.
    fn tool_error(&self, source: unarc_platform::Error) -> Error {
        if source.exit_code() == Some(UNRAR_EXIT_DAMAGED) {
            return Error::format(FormatClass::Rar, &self.path, source);
        }
        Error::ToolExecution {
            tool: self.tool.path().to_path_buf(),
            archive: self.path.clone(),
            source,
        }
    }
}

impl ArchiveDecoder for RarDecoder<'_> {
    fn format(&self) -> FormatClass {
        FormatClass::Rar
    }

    fn extract_all(&mut self, destination: &Path) -> Result<()> {
        debug!(archive = %self.path.display(), dest = %destination.display(), "unrar extract");
        self.tool
            .command()
            .args(["x", "-o+", "-y", "-p-", "-idq", "--"])
            .arg(&self.path)
            .arg(destination_arg(destination))
            .run()
            .map_err(|e| self.tool_error(e))?;
        Ok(())
    }

    fn member_names(&mut self) -> Result<Vec<String>> {
        let output = self
            .tool
            .command()
            .args(["lb", "-p-", "--"])
            .arg(&self.path)
            .run()
            .map_err(|e| self.tool_error(e))?;
        Ok(parse_bare_listing(&String::from_utf8_lossy(&output.stdout)))
    }
}

fn has_rar_signature(header: &[u8]) -> bool {
    header.starts_with(RAR5_SIGNATURE) || header.starts_with(RAR4_SIGNATURE)
}

/// `unrar` takes a trailing separator as "extract into this directory".
fn destination_arg(destination: &Path) -> OsString {
    let mut arg = destination.as_os_str().to_os_string();
    if !arg.to_string_lossy().ends_with(std::path::is_separator) {
        arg.push(MAIN_SEPARATOR_STR);
    }
    arg
}

fn parse_bare_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
