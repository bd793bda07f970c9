mod category;
mod rules;
pub mod sensitive;
pub mod tokenizer;

pub use category::Category;
pub use rules::{
    Categorizer, Rule, Verdict, MIN_FILE_SIZE, MIN_TOKEN_COUNT, NEW_WITHIN_YEARS,
    OLD_AFTER_YEARS, PLACEHOLDER_PHRASE, UNUSED_AFTER_DAYS,
};
pub use sensitive::{contains_sensitive_patterns, find_sensitive, SensitiveKind};
pub use tokenizer::{tokenize, Tokens};

use std::path::{Path, PathBuf};

use crate::metadata::FileTimes;

/// One file being categorized. Lives only for the duration of a single
/// categorization.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
    lowercase_text: String,
    times: FileTimes,
    tokens: Tokens,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, times: FileTimes) -> Self {
        let text = text.into();
        Self {
            path: path.into(),
            lowercase_text: text.to_lowercase(),
            tokens: tokenize(&text),
            text,
            times,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lowercase_text(&self) -> &str {
        &self.lowercase_text
    }

    pub fn times(&self) -> &FileTimes {
        &self.times
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}
