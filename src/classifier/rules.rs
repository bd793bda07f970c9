use chrono::{DateTime, Datelike, Local};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

use super::sensitive::find_sensitive;
use super::{Category, Document};
use crate::config::ScanConfig;
use crate::error::IoError;
use crate::metadata::{FileTimes, FsMetadataReader, MetadataReader};

/// Documents with fewer tokens than this are junk.
pub const MIN_TOKEN_COUNT: usize = 30;
/// Files smaller than this many bytes are junk.
pub const MIN_FILE_SIZE: u64 = 5000;
pub const PLACEHOLDER_PHRASE: &str = "lorem ipsum";
pub const OLD_AFTER_YEARS: i32 = 3;
pub const NEW_WITHIN_YEARS: i32 = 1;
pub const UNUSED_AFTER_DAYS: i64 = 365;

/// Rules in evaluation order. The first one that matches decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    ImportantKeywordOrPattern,
    ImportantPhrase,
    JunkShortOrPlaceholder,
    JunkFileSize,
    JunkKeyword,
    JunkDateWindow,
    Old,
    New,
    Unused,
    Current,
}

impl Rule {
    pub const ALL: [Rule; 10] = [
        Rule::ImportantKeywordOrPattern,
        Rule::ImportantPhrase,
        Rule::JunkShortOrPlaceholder,
        Rule::JunkFileSize,
        Rule::JunkKeyword,
        Rule::JunkDateWindow,
        Rule::Old,
        Rule::New,
        Rule::Unused,
        Rule::Current,
    ];

    pub fn category(&self) -> Category {
        match self {
            Rule::ImportantKeywordOrPattern | Rule::ImportantPhrase => Category::Important,
            Rule::JunkShortOrPlaceholder
            | Rule::JunkFileSize
            | Rule::JunkKeyword
            | Rule::JunkDateWindow => Category::Junk,
            Rule::Old => Category::Old,
            Rule::New => Category::New,
            Rule::Unused => Category::Unused,
            Rule::Current => Category::Current,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ImportantKeywordOrPattern => "important_keyword_or_pattern",
            Rule::ImportantPhrase => "important_phrase",
            Rule::JunkShortOrPlaceholder => "junk_short_or_placeholder",
            Rule::JunkFileSize => "junk_file_size",
            Rule::JunkKeyword => "junk_keyword",
            Rule::JunkDateWindow => "junk_date_window",
            Rule::Old => "old",
            Rule::New => "new",
            Rule::Unused => "unused",
            Rule::Current => "current",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub category: Category,
    pub rule: Rule,
}

impl From<Rule> for Verdict {
    fn from(rule: Rule) -> Self {
        Self {
            category: rule.category(),
            rule,
        }
    }
}

/// Ordered rule chain over a read-only configuration snapshot.
///
/// The clock is fixed at construction so every document in a scan is judged
/// against the same instant.
#[derive(Debug, Clone, Copy)]
pub struct Categorizer<'a> {
    config: &'a ScanConfig,
    now: DateTime<Local>,
}

impl<'a> Categorizer<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self::at(config, Local::now())
    }

    pub fn at(config: &'a ScanConfig, now: DateTime<Local>) -> Self {
        Self { config, now }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn config(&self) -> &'a ScanConfig {
        self.config
    }

    /// Categorizes the file at `path`, reading its size from disk only if
    /// the chain gets that far.
    pub fn categorize(
        &self,
        path: &Path,
        text: &str,
        times: &FileTimes,
    ) -> Result<Category, IoError> {
        let document = Document::new(path, text, *times);
        let verdict = self.evaluate(&document, || FsMetadataReader.file_size(path))?;
        Ok(verdict.category)
    }

    pub fn evaluate<F>(&self, document: &Document, file_size: F) -> Result<Verdict, IoError>
    where
        F: FnOnce() -> Result<u64, IoError>,
    {
        let rule = self.first_matching_rule(document, file_size)?;
        debug!(
            file = %document.path().display(),
            rule = rule.as_str(),
            category = rule.category().as_str(),
            "categorized"
        );
        Ok(Verdict::from(rule))
    }

    fn first_matching_rule<F>(&self, document: &Document, file_size: F) -> Result<Rule, IoError>
    where
        F: FnOnce() -> Result<u64, IoError>,
    {
        let config = self.config;
        let tokens = document.tokens();
        let lowered = document.lowercase_text();

        if tokens.intersects(config.important_keywords()) {
            return Ok(Rule::ImportantKeywordOrPattern);
        }
        if let Some(kind) = find_sensitive(document.text()) {
            trace!(kind = kind.as_str(), "sensitive pattern matched");
            return Ok(Rule::ImportantKeywordOrPattern);
        }

        if config
            .important_phrases()
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
        {
            return Ok(Rule::ImportantPhrase);
        }

        if tokens.count() < MIN_TOKEN_COUNT || lowered.contains(PLACEHOLDER_PHRASE) {
            return Ok(Rule::JunkShortOrPlaceholder);
        }

        let size = file_size()?;
        if size < MIN_FILE_SIZE {
            return Ok(Rule::JunkFileSize);
        }

        if tokens.intersects(config.junk_keywords()) {
            return Ok(Rule::JunkKeyword);
        }

        // Files created inside the window are junk, not the ones outside it.
        let times = document.times();
        if config.date_window().contains(&times.created) {
            return Ok(Rule::JunkDateWindow);
        }

        let current_year = self.now.year();
        if times.created.year() < current_year - OLD_AFTER_YEARS {
            return Ok(Rule::Old);
        }
        if times.modified.year() >= current_year - NEW_WITHIN_YEARS {
            return Ok(Rule::New);
        }
        if (self.now - times.accessed).num_days() > UNUSED_AFTER_DAYS {
            return Ok(Rule::Unused);
        }

        Ok(Rule::Current)
    }
}
