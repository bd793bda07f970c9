use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read metadata for '{path}': {source}")]
    MetadataError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to list directory '{path}': {source}")]
    ListError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to move '{from}' to '{to}': {source}")]
    MoveError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn metadata_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path: path.into() };
        }
        Self::MetadataError {
            path: path.into(),
            source,
        }
    }

    pub fn list_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ListError {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDirError {
            path: path.into(),
            source,
        }
    }

    pub fn move_error(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::MoveError {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// True when the underlying cause is a path that vanished.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileNotFound { .. } | Self::DirectoryNotFound { .. } => true,
            Self::MetadataError { source, .. }
            | Self::CreateDirError { source, .. }
            | Self::MoveError { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
