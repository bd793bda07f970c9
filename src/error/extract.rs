use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to extract PDF text from '{path}': {message}")]
    PdfError { path: PathBuf, message: String },

    #[error("failed to parse DOCX '{path}': {message}")]
    DocxError { path: PathBuf, message: String },
}

impl ExtractError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn pdf_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PdfError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn docx_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DocxError {
            path: path.into(),
            message: message.into(),
        }
    }
}
