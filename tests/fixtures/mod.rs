#![allow(dead_code)]

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use doctagger::error::IoError;
use doctagger::{FileTimes, FsMetadataReader, MetadataReader};

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Writes `text` padded with trailing spaces up to `size` bytes.
pub fn write_padded(dir: &Path, name: &str, text: &str, size: usize) -> PathBuf {
    let mut contents = text.to_string();
    while contents.len() < size {
        contents.push(' ');
    }
    write_file(dir, name, &contents)
}

/// Ordinary prose with `words` tokens and nothing that triggers a rule.
pub fn prose(words: usize) -> String {
    const VOCABULARY: [&str; 8] = [
        "the", "river", "flows", "past", "quiet", "meadows", "under", "clouds",
    ];
    (0..words)
        .map(|i| VOCABULARY[i % VOCABULARY.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serves fixed timestamps per file name and reads sizes from disk. Files
/// without an entry fail as if they had vanished.
pub struct StubMetadata {
    times: HashMap<String, FileTimes>,
}

impl StubMetadata {
    pub fn new() -> Self {
        Self {
            times: HashMap::new(),
        }
    }

    pub fn with(mut self, name: &str, times: FileTimes) -> Self {
        self.times.insert(name.to_string(), times);
        self
    }

    pub fn uniform(
        names: &[&str],
        created: DateTime<Local>,
        modified: DateTime<Local>,
        accessed: DateTime<Local>,
    ) -> Self {
        let mut stub = Self::new();
        for name in names {
            stub = stub.with(name, FileTimes::new(created, modified, accessed));
        }
        stub
    }
}

impl MetadataReader for StubMetadata {
    fn read_times(&self, path: &Path) -> Result<FileTimes, IoError> {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.times
            .get(&name)
            .copied()
            .ok_or_else(|| IoError::file_not_found(path))
    }

    fn file_size(&self, path: &Path) -> Result<u64, IoError> {
        FsMetadataReader.file_size(path)
    }
}
