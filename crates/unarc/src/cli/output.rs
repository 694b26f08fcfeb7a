use std::io::{self, Write};

use serde::Serialize;
use unarc_archive::ExtractionReport;

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub format: &'static str,
    pub output_dir: String,
    pub members: usize,
    pub files: Vec<String>,
}

impl From<&ExtractionReport> for JsonReport {
    fn from(report: &ExtractionReport) -> Self {
        Self {
            format: report.format.name(),
            output_dir: report.output_dir.display().to_string(),
            members: report.member_count,
            files: report
                .files
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
        }
    }
}

pub fn write_lines(out: &mut impl Write, report: &ExtractionReport) -> io::Result<()> {
    for file in &report.files {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, report: &ExtractionReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out)
}
