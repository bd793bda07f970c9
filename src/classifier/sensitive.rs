//! Detection of identity and financial data shapes in free text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Kinds of sensitive shapes the detector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitiveKind {
    /// Twelve digits written as three space-separated groups of four.
    NationalId,
    /// Five uppercase letters, four digits, one uppercase letter.
    TaxId,
    /// A bare ten-digit number.
    Phone,
    Email,
}

impl SensitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitiveKind::NationalId => "national_id",
            SensitiveKind::TaxId => "tax_id",
            SensitiveKind::Phone => "phone",
            SensitiveKind::Email => "email",
        }
    }
}

static NATIONAL_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{4} \d{4} \d{4}\b").expect("national id regex is hardcoded and valid")
});

static TAX_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]{5}\d{4}[A-Z]\b").expect("tax id regex is hardcoded and valid")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("phone regex is hardcoded and valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+")
        .expect("email regex is hardcoded and valid")
});

fn patterns() -> [(SensitiveKind, &'static Regex); 4] {
    [
        (SensitiveKind::NationalId, &*NATIONAL_ID_PATTERN),
        (SensitiveKind::TaxId, &*TAX_ID_PATTERN),
        (SensitiveKind::Phone, &*PHONE_PATTERN),
        (SensitiveKind::Email, &*EMAIL_PATTERN),
    ]
}

/// Returns the first sensitive shape found in `text`.
pub fn find_sensitive(text: &str) -> Option<SensitiveKind> {
    patterns()
        .into_iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(kind, _)| kind)
}

pub fn contains_sensitive_patterns(text: &str) -> bool {
    find_sensitive(text).is_some()
}
