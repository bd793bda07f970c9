use std::collections::HashSet;

/// Normalized words of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    words: HashSet<String>,
    count: usize,
}

impl Tokens {
    /// Number of tokens, duplicates included.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn intersects(&self, keywords: &HashSet<String>) -> bool {
        let (small, large) = if self.words.len() <= keywords.len() {
            (&self.words, keywords)
        } else {
            (keywords, &self.words)
        };
        small.iter().any(|w| large.contains(w))
    }
}

/// Lowercases, drops ASCII punctuation, splits on whitespace and keeps
/// only purely alphanumeric tokens.
pub fn tokenize(text: &str) -> Tokens {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let mut tokens = Tokens::default();
    for word in stripped.split_whitespace() {
        if word.chars().all(char::is_alphanumeric) {
            tokens.count += 1;
            tokens.words.insert(word.to_string());
        }
    }
    tokens
}
