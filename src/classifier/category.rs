use serde::Serialize;
use std::fmt;

/// The single tag a document resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Important,
    Junk,
    Old,
    New,
    Unused,
    Current,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Important,
        Category::Junk,
        Category::Old,
        Category::New,
        Category::Unused,
        Category::Current,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Important => "important",
            Category::Junk => "junk",
            Category::Old => "old",
            Category::New => "new",
            Category::Unused => "unused",
            Category::Current => "current",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
