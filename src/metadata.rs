use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::trace;

use crate::error::IoError;

/// Creation, modification and last-access instants of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimes {
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub accessed: DateTime<Local>,
}

impl FileTimes {
    pub fn new(
        created: DateTime<Local>,
        modified: DateTime<Local>,
        accessed: DateTime<Local>,
    ) -> Self {
        Self {
            created,
            modified,
            accessed,
        }
    }

    pub fn from_metadata(metadata: &fs::Metadata) -> std::io::Result<Self> {
        let modified = metadata.modified()?;
        // Not every filesystem records a birth time.
        let created = metadata.created().unwrap_or(modified);
        let accessed = metadata.accessed().unwrap_or(modified);

        Ok(Self {
            created: to_local(created),
            modified: to_local(modified),
            accessed: to_local(accessed),
        })
    }
}

fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

pub trait MetadataReader: Send + Sync {
    fn read_times(&self, path: &Path) -> Result<FileTimes, IoError>;

    fn file_size(&self, path: &Path) -> Result<u64, IoError>;
}

/// Reads timestamps and sizes straight from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMetadataReader;

impl MetadataReader for FsMetadataReader {
    fn read_times(&self, path: &Path) -> Result<FileTimes, IoError> {
        trace!(path = %path.display(), "reading file times");
        let metadata = fs::metadata(path).map_err(|e| IoError::metadata_error(path, e))?;
        FileTimes::from_metadata(&metadata).map_err(|e| IoError::metadata_error(path, e))
    }

    fn file_size(&self, path: &Path) -> Result<u64, IoError> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| IoError::metadata_error(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_times_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let times = FsMetadataReader.read_times(&path).unwrap();
        let now = Local::now();
        assert!(times.modified <= now);
        assert!((now - times.created).num_days() < 1);
    }

    #[test]
    fn test_read_times_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = FsMetadataReader.read_times(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sized.txt");
        fs::write(&path, vec![b'a'; 1536]).unwrap();

        assert_eq!(FsMetadataReader.file_size(&path).unwrap(), 1536);
    }
}
