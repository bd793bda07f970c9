//! Folder scan: lists eligible documents, extracts their text and runs each
//! through the categorizer.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::classifier::{Categorizer, Category, Document, Rule};
use crate::config::ScanConfig;
use crate::error::IoError;
use crate::extract::{DefaultExtractor, DocumentKind, TextExtractor};
use crate::metadata::{FsMetadataReader, MetadataReader};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub file: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub category: Category,
    pub rule: Rule,
    pub created: NaiveDate,
    pub modified: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub files: Vec<FileRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    /// True when the folder held no file with an eligible extension.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.skipped.is_empty()
    }

    pub fn eligible_count(&self) -> usize {
        self.files.len() + self.skipped.len()
    }

    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.files {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn category_of(&self, file: &str) -> Option<Category> {
        self.files
            .iter()
            .find(|r| r.file == file)
            .map(|r| r.category)
    }
}

/// Outcome for one eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Categorized(FileRecord),
    Skipped(SkippedFile),
}

pub struct Scanner<'a, E = DefaultExtractor, M = FsMetadataReader> {
    categorizer: Categorizer<'a>,
    extractor: E,
    metadata: M,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            categorizer: Categorizer::new(config),
            extractor: DefaultExtractor,
            metadata: FsMetadataReader,
        }
    }
}

impl<'a, E, M> Scanner<'a, E, M>
where
    E: TextExtractor,
    M: MetadataReader,
{
    pub fn with_extractor<E2: TextExtractor>(self, extractor: E2) -> Scanner<'a, E2, M> {
        Scanner {
            categorizer: self.categorizer,
            extractor,
            metadata: self.metadata,
        }
    }

    pub fn with_metadata_reader<M2: MetadataReader>(self, metadata: M2) -> Scanner<'a, E, M2> {
        Scanner {
            categorizer: self.categorizer,
            extractor: self.extractor,
            metadata,
        }
    }

    /// Pins the clock the rules compare timestamps against.
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.categorizer = Categorizer::at(self.categorizer.config(), now);
        self
    }

    pub fn scan(&self, folder: &Path) -> Result<ScanReport, IoError> {
        let mut report = ScanReport::default();
        self.scan_with(folder, |event| match event {
            ScanEvent::Categorized(record) => report.files.push(record.clone()),
            ScanEvent::Skipped(skipped) => report.skipped.push(skipped.clone()),
        })?;
        Ok(report)
    }

    /// Processes eligible files one at a time, handing each outcome to
    /// `on_event` as soon as it is known. Returns the number of eligible
    /// files seen.
    pub fn scan_with<F>(&self, folder: &Path, mut on_event: F) -> Result<usize, IoError>
    where
        F: FnMut(&ScanEvent),
    {
        let files = list_eligible_files(folder)?;
        info!(folder = %folder.display(), count = files.len(), "scanning folder");

        for path in &files {
            let event = match self.process(path) {
                Ok(record) => ScanEvent::Categorized(record),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    ScanEvent::Skipped(SkippedFile {
                        file: file_name(path),
                        reason: e.to_string(),
                    })
                }
            };
            on_event(&event);
        }

        Ok(files.len())
    }

    fn process(&self, path: &Path) -> Result<FileRecord, IoError> {
        let times = self.metadata.read_times(path)?;
        let text = self.extractor.extract(path).into_text();
        debug!(path = %path.display(), chars = text.len(), "extracted text");

        let document = Document::new(path, text, times);
        let verdict = self
            .categorizer
            .evaluate(&document, || self.metadata.file_size(path))?;

        Ok(FileRecord {
            file: file_name(path),
            path: path.to_path_buf(),
            category: verdict.category,
            rule: verdict.rule,
            created: times.created.date_naive(),
            modified: times.modified.date_naive(),
        })
    }
}

/// Direct children of `folder` that are regular files with an eligible
/// extension, sorted by name.
pub fn list_eligible_files(folder: &Path) -> Result<Vec<PathBuf>, IoError> {
    Ok(list_files(folder)?
        .into_iter()
        .filter(|p| DocumentKind::from_path(p).is_some())
        .collect())
}

/// Direct children of `folder` that are regular files, sorted by name.
pub fn list_files(folder: &Path) -> Result<Vec<PathBuf>, IoError> {
    ensure_directory(folder)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IoError::list_error(folder, e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn ensure_directory(folder: &Path) -> Result<(), IoError> {
    if !folder.exists() {
        return Err(IoError::directory_not_found(folder));
    }
    if !folder.is_dir() {
        return Err(IoError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }
    Ok(())
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_eligible_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.PDF", "c.docx", "notes.md", "noext"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();
        fs::write(temp_dir.path().join("dir.txt").join("nested.txt"), "x").unwrap();

        let files = list_eligible_files(temp_dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.PDF", "b.txt", "c.docx"]);
    }

    #[test]
    fn test_list_files_missing_folder() {
        let err = list_files(Path::new("/nonexistent/folder")).unwrap_err();
        assert!(matches!(err, IoError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_list_files_on_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();
        assert!(matches!(
            list_files(&path),
            Err(IoError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("photo.jpg"), "x").unwrap();

        let config = ScanConfig::default();
        let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.eligible_count(), 0);
    }

    #[test]
    fn test_counts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.txt"), "short").unwrap();
        fs::write(temp_dir.path().join("two.txt"), "also short").unwrap();

        let config = ScanConfig::default();
        let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();
        assert_eq!(report.counts().get(&Category::Junk), Some(&2));
        assert_eq!(report.category_of("one.txt"), Some(Category::Junk));
    }
}
