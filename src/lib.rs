/// Document Tagger
///
/// Scans a folder of PDF, DOCX and plain-text documents, extracts their text
/// and tags each file as important, junk, old, new, unused or current using
/// an ordered chain of heuristic rules. Also reorganizes folders into
/// extension, size or access-age buckets.
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod metadata;
pub mod organize;
pub mod output;
pub mod scanner;

pub use classifier::{Categorizer, Category, Document, Rule, Verdict};
pub use config::{DateWindow, ScanConfig};
pub use error::{ConfigError, ExtractError, IoError};
pub use extract::{DefaultExtractor, Extraction, TextExtractor};
pub use metadata::{FileTimes, FsMetadataReader, MetadataReader};
pub use organize::{OrganizeReport, Organizer};
pub use scanner::{ScanReport, Scanner};
