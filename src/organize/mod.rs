//! Folder reorganization: moves the top-level files of a folder into bucket
//! subfolders keyed by extension, size class or last-access age.
//!
//! Each action enumerates the folder once and then moves files one by one.
//! A file that vanished in between is skipped. Any other failure stops the
//! action; files already moved stay where they are.

mod access;
mod extension;
mod size;

pub use access::{access_bucket, days_since};
pub use extension::extension_bucket;
pub use size::{size_bucket, HumanSize, SizeUnit};

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cli::OrganizeMode;
use crate::error::IoError;
use crate::metadata::{FsMetadataReader, MetadataReader};
use crate::scanner::{file_name, list_files};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovedFile {
    pub file: String,
    pub bucket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeReport {
    pub moved: Vec<MovedFile>,
    pub skipped: Vec<String>,
}

impl OrganizeReport {
    pub fn bucket_of(&self, file: &str) -> Option<&str> {
        self.moved
            .iter()
            .find(|m| m.file == file)
            .map(|m| m.bucket.as_str())
    }
}

#[derive(Debug)]
struct PlannedMove {
    source: PathBuf,
    bucket: String,
}

pub struct Organizer {
    root: PathBuf,
    skip: Vec<PathBuf>,
    now: DateTime<Local>,
}

impl Organizer {
    /// `skip_paths` are left untouched. Relative entries resolve against
    /// `root`.
    pub fn new(root: impl Into<PathBuf>, skip_paths: &[PathBuf]) -> Self {
        let root = root.into();
        let skip = skip_paths
            .iter()
            .map(|p| {
                let absolute = if p.is_relative() { root.join(p) } else { p.clone() };
                absolute.canonicalize().unwrap_or(absolute)
            })
            .collect();
        Self {
            root,
            skip,
            now: Local::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn organize(&self, mode: OrganizeMode) -> Result<OrganizeReport, IoError> {
        info!(root = %self.root.display(), mode = mode.as_str(), "organizing folder");
        let mut report = OrganizeReport::default();

        let plan = self.plan(mode, &mut report)?;
        for planned in plan {
            self.execute(planned, &mut report)?;
        }

        info!(
            moved = report.moved.len(),
            skipped = report.skipped.len(),
            "organize complete"
        );
        Ok(report)
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.skip.iter().any(|s| *s == canonical)
    }

    fn plan(
        &self,
        mode: OrganizeMode,
        report: &mut OrganizeReport,
    ) -> Result<Vec<PlannedMove>, IoError> {
        let mut plan = Vec::new();

        for source in list_files(&self.root)? {
            if self.is_skipped(&source) {
                debug!(path = %source.display(), "excluded from organize");
                continue;
            }

            let bucket = match self.bucket_for(mode, &source) {
                Ok(Some(bucket)) => bucket,
                Ok(None) => {
                    debug!(path = %source.display(), "no bucket, leaving in place");
                    continue;
                }
                Err(e) if e.is_not_found() => {
                    warn!(path = %source.display(), "file disappeared before it could be moved");
                    report.skipped.push(file_name(&source));
                    continue;
                }
                Err(e) => return Err(e),
            };

            plan.push(PlannedMove { source, bucket });
        }

        Ok(plan)
    }

    fn bucket_for(&self, mode: OrganizeMode, path: &Path) -> Result<Option<String>, IoError> {
        match mode {
            OrganizeMode::Extension => Ok(extension_bucket(path)),
            OrganizeMode::Size => {
                let bytes = FsMetadataReader.file_size(path)?;
                Ok(Some(size_bucket(bytes)))
            }
            OrganizeMode::Accessed => {
                let times = FsMetadataReader.read_times(path)?;
                let days = days_since(times.accessed, self.now);
                Ok(Some(access_bucket(days).to_string()))
            }
        }
    }

    fn execute(&self, planned: PlannedMove, report: &mut OrganizeReport) -> Result<(), IoError> {
        let name = file_name(&planned.source);
        let bucket_dir = self.root.join(&planned.bucket);
        let target = bucket_dir.join(&name);

        if !planned.source.exists() {
            warn!(path = %planned.source.display(), "file disappeared before it could be moved");
            report.skipped.push(name);
            return Ok(());
        }

        fs::create_dir_all(&bucket_dir).map_err(|e| IoError::create_dir_error(&bucket_dir, e))?;

        match fs::rename(&planned.source, &target) {
            Ok(()) => {
                debug!(file = %name, bucket = %planned.bucket, "moved");
                report.moved.push(MovedFile {
                    file: name,
                    bucket: planned.bucket,
                });
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !planned.source.exists() => {
                warn!(path = %planned.source.display(), "file disappeared before it could be moved");
                report.skipped.push(name);
                Ok(())
            }
            Err(e) => Err(IoError::move_error(&planned.source, &target, e)),
        }
    }
}
