//! Text extraction for the supported document formats.
//!
//! Extraction never fails from the caller's point of view: an unreadable or
//! unsupported file yields an [`Extraction`] whose text is empty.

mod docx;
mod pdf;
mod txt;

use std::path::Path;
use tracing::{debug, warn};

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Matches the file-name suffix case-insensitively, so a bare `.txt`
    /// counts as a text document.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if name.ends_with(".docx") {
            Some(Self::Docx)
        } else if name.ends_with(".txt") {
            Some(Self::Txt)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Unsupported,
    Failed { reason: String },
}

impl Extraction {
    /// Extracted text, empty when nothing could be read.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Unsupported | Self::Failed { .. } => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unsupported | Self::Failed { .. } => String::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<Result<String, ExtractError>> for Extraction {
    fn from(result: Result<String, ExtractError>) -> Self {
        match result {
            Ok(text) => Self::Text(text),
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Extraction;
}

/// Dispatches on the file extension to the PDF, DOCX or plain-text reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultExtractor;

impl TextExtractor for DefaultExtractor {
    fn extract(&self, path: &Path) -> Extraction {
        let Some(kind) = DocumentKind::from_path(path) else {
            debug!(path = %path.display(), "unsupported document type");
            return Extraction::Unsupported;
        };

        let result = match kind {
            DocumentKind::Pdf => pdf::extract(path),
            DocumentKind::Docx => docx::extract(path),
            DocumentKind::Txt => txt::extract(path),
        };

        let extraction = Extraction::from(result);
        if let Extraction::Failed { reason } = &extraction {
            warn!(path = %path.display(), kind = kind.as_str(), %reason, "text extraction failed");
        }
        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_document_kind_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("a.pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("b.DOCX")),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("c.Txt")),
            Some(DocumentKind::Txt)
        );
        assert_eq!(DocumentKind::from_path(Path::new("d.md")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
        assert_eq!(
            DocumentKind::from_path(Path::new("/docs/.txt")),
            Some(DocumentKind::Txt)
        );
        assert_eq!(DocumentKind::from_path(Path::new("notes.txt.bak")), None);
    }

    #[test]
    fn test_extract_txt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");
        fs::write(&path, "bank statement details here").unwrap();

        let extraction = DefaultExtractor.extract(&path);
        assert_eq!(extraction, Extraction::Text("bank statement details here".into()));
    }

    #[test]
    fn test_extract_unsupported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("image.png");
        fs::write(&path, [0u8, 1, 2]).unwrap();

        let extraction = DefaultExtractor.extract(&path);
        assert_eq!(extraction, Extraction::Unsupported);
        assert_eq!(extraction.text(), "");
    }

    #[test]
    fn test_broken_pdf_yields_empty_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.pdf");
        fs::write(&path, "this is not a pdf").unwrap();

        let extraction = DefaultExtractor.extract(&path);
        assert!(matches!(extraction, Extraction::Failed { .. }));
        assert_eq!(extraction.text(), "");
    }

    #[test]
    fn test_broken_docx_yields_empty_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.docx");
        fs::write(&path, "not a zip archive").unwrap();

        let extraction = DefaultExtractor.extract(&path);
        assert!(!extraction.is_text());
        assert_eq!(extraction.into_text(), "");
    }
}
