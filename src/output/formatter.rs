use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::classifier::Category;
use crate::cli::{OrganizeMode, OutputFormat};
use crate::config::DATE_FORMAT;
use crate::organize::OrganizeReport;
use crate::scanner::{FileRecord, ScanReport, SkippedFile};

pub const NO_FILES_MESSAGE: &str = "No valid files (.pdf, .docx, .txt) found in the folder.";

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub counts: BTreeMap<Category, usize>,
    pub files: &'a [FileRecord],
    #[serde(skip_serializing_if = "no_skipped")]
    pub skipped: &'a [SkippedFile],
}

fn no_skipped(skipped: &&[SkippedFile]) -> bool {
    skipped.is_empty()
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &ScanReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::text(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(report))?),
        }
    }

    pub fn build_output(report: &ScanReport) -> JsonOutput<'_> {
        JsonOutput {
            files_scanned: report.files.len(),
            files_skipped: report.skipped.len(),
            counts: report.counts(),
            files: &report.files,
            skipped: &report.skipped,
        }
    }

    pub fn text(report: &ScanReport) -> String {
        if report.is_empty() {
            return format!("{NO_FILES_MESSAGE}\n");
        }
        let mut out = String::new();
        for record in &report.files {
            out.push_str(&Self::line(record));
            out.push('\n');
        }
        out
    }

    /// Mode description followed by one `<filename> --> <bucket>` line per
    /// moved file, or the report itself as JSON.
    pub fn format_organize(
        report: &OrganizeReport,
        mode: OrganizeMode,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = format!("{}\n", mode.description());
                for moved in &report.moved {
                    out.push_str(&format!("{} --> {}\n", moved.file, moved.bucket));
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// `<filename> --> Tag: <category> | Created: <date> | Modified: <date>`
    pub fn line(record: &FileRecord) -> String {
        format!(
            "{} --> Tag: {} | Created: {} | Modified: {}",
            record.file,
            record.category,
            record.created.format(DATE_FORMAT),
            record.modified.format(DATE_FORMAT)
        )
    }
}
