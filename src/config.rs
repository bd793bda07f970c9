//! Scan configuration.
//!
//! A [`ScanConfig`] is assembled once per invocation by [`ScanConfigBuilder`]
//! and then only read. Nothing in the crate mutates it while a scan or an
//! organize action is running.

use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::error::ConfigError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_IMPORTANT_PHRASES: [&str; 4] = [
    "confidential report",
    "bank statement",
    "marksheet",
    "payment receipt",
];

/// Inclusive window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            from: NaiveDate::MIN,
            to: NaiveDate::MAX,
        }
    }
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, instant: &DateTime<Local>) -> bool {
        let date = instant.date_naive();
        self.from <= date && date <= self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ConfigError::invalid_date(field, value))
}

pub fn normalize_keyword(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Splits a comma-separated keyword list, normalizing each entry.
pub fn parse_keyword_list(input: &str) -> HashSet<String> {
    input
        .split(',')
        .map(normalize_keyword)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Reads one keyword per line, normalizing each and dropping blank lines.
pub fn read_keyword_file(path: &Path) -> Result<HashSet<String>, ConfigError> {
    trace!(path = %path.display(), "reading keyword file");
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::keyword_file_read_error(path, e.to_string()))?;

    let words: HashSet<String> = content
        .lines()
        .map(normalize_keyword)
        .filter(|w| !w.is_empty())
        .collect();
    debug!(path = %path.display(), count = words.len(), "loaded keyword file");
    Ok(words)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    important_keywords: HashSet<String>,
    important_phrases: Vec<String>,
    junk_keywords: HashSet<String>,
    date_window: DateWindow,
    skip_paths: Vec<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfigBuilder::new().build()
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    pub fn important_keywords(&self) -> &HashSet<String> {
        &self.important_keywords
    }

    pub fn important_phrases(&self) -> &[String] {
        &self.important_phrases
    }

    pub fn junk_keywords(&self) -> &HashSet<String> {
        &self.junk_keywords
    }

    pub fn date_window(&self) -> DateWindow {
        self.date_window
    }

    pub fn skip_paths(&self) -> &[PathBuf] {
        &self.skip_paths
    }
}

/// On-disk configuration, JSON or YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    important_keywords: Vec<String>,
    #[serde(default)]
    important_phrases: Vec<String>,
    #[serde(default)]
    junk_keywords: Vec<String>,
    #[serde(default)]
    junk_keyword_files: Vec<PathBuf>,
    from: Option<String>,
    to: Option<String>,
    #[serde(default)]
    skip: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ScanConfigBuilder {
    important_keywords: HashSet<String>,
    important_phrases: Vec<String>,
    junk_keywords: HashSet<String>,
    date_window: DateWindow,
    skip_paths: Vec<PathBuf>,
}

impl Default for ScanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self {
            important_keywords: HashSet::new(),
            important_phrases: DEFAULT_IMPORTANT_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            junk_keywords: HashSet::new(),
            date_window: DateWindow::default(),
            skip_paths: Vec::new(),
        }
    }

    /// Replaces the important keyword set. An empty input leaves the current
    /// set untouched.
    pub fn important_keywords_csv(mut self, input: &str) -> Self {
        let keywords = parse_keyword_list(input);
        if !keywords.is_empty() {
            self.important_keywords = keywords;
        }
        self
    }

    pub fn important_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.important_keywords = words
            .into_iter()
            .map(|w| normalize_keyword(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    pub fn important_phrase(mut self, phrase: &str) -> Self {
        let phrase = normalize_keyword(phrase);
        if !phrase.is_empty() && !self.important_phrases.contains(&phrase) {
            self.important_phrases.push(phrase);
        }
        self
    }

    pub fn junk_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.junk_keywords.extend(
            words
                .into_iter()
                .map(|w| normalize_keyword(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Adds the keywords listed in `path` to the junk set.
    pub fn load_junk_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let words = read_keyword_file(path.as_ref())?;
        self.junk_keywords.extend(words);
        Ok(self)
    }

    pub fn date_window(mut self, window: DateWindow) -> Self {
        self.date_window = window;
        self
    }

    pub fn from_date(mut self, from: NaiveDate) -> Self {
        self.date_window.from = from;
        self
    }

    pub fn to_date(mut self, to: NaiveDate) -> Self {
        self.date_window.to = to;
        self
    }

    pub fn from_date_str(self, value: &str) -> Result<Self, ConfigError> {
        let from = parse_date("from", value)?;
        Ok(self.from_date(from))
    }

    pub fn to_date_str(self, value: &str) -> Result<Self, ConfigError> {
        let to = parse_date("to", value)?;
        Ok(self.to_date(to))
    }

    pub fn skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_paths.push(path.into());
        self
    }

    /// Merges a JSON or YAML config file, chosen by extension.
    pub fn load_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::config_file_read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let file: ConfigFile = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::config_parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::config_parse_error(path, e.to_string()))?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        let base_dir = path.parent().unwrap_or(Path::new("."));
        self.merge_file(file, base_dir)
    }

    fn merge_file(mut self, file: ConfigFile, base_dir: &Path) -> Result<Self, ConfigError> {
        if !file.important_keywords.is_empty() {
            self = self.important_keywords(file.important_keywords);
        }
        for phrase in &file.important_phrases {
            self = self.important_phrase(phrase);
        }
        self = self.junk_keywords(file.junk_keywords);
        for junk_file in file.junk_keyword_files {
            let resolved = if junk_file.is_relative() {
                base_dir.join(junk_file)
            } else {
                junk_file
            };
            self = self.load_junk_file(resolved)?;
        }
        if let Some(from) = file.from.as_deref() {
            self = self.from_date_str(from)?;
        }
        if let Some(to) = file.to.as_deref() {
            self = self.to_date_str(to)?;
        }
        self.skip_paths.extend(file.skip);
        Ok(self)
    }

    pub fn build(self) -> ScanConfig {
        if self.date_window.is_empty() {
            warn!(
                from = %self.date_window.from,
                to = %self.date_window.to,
                "date window is empty, no file will match it"
            );
        }
        ScanConfig {
            important_keywords: self.important_keywords,
            important_phrases: self.important_phrases,
            junk_keywords: self.junk_keywords,
            date_window: self.date_window,
            skip_paths: self.skip_paths,
        }
    }
}
