use std::collections::HashSet;

use lazy_static::lazy_static;

/// Every character that delimits words: whitespace, ASCII punctuation used
/// as quoting or sentence structure, and the bracket/operator characters
/// that show up in prose and source listings.
const STANDARD_CHARS: &str = " \"\t\n\r,-.!?';:/()*_\\[]{}|<>~=";

lazy_static! {
    static ref STANDARD: SeparatorSet = SeparatorSet::from_chars(STANDARD_CHARS);
}

/// An immutable set of characters that delimit words.
///
/// A token produced against this set is either entirely separators or
/// entirely non-separators. The set is never empty and never changes after
/// construction.
#[derive(Debug, Clone)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from the characters of `chars`. Duplicates collapse.
    ///
    /// Panics if `chars` is empty; an empty separator set cannot classify
    /// runs and is a caller bug, not a recoverable condition.
    pub fn from_chars(chars: &str) -> Self {
        let chars: HashSet<char> = chars.chars().collect();
        assert!(!chars.is_empty(), "separator set must not be empty");
        SeparatorSet { chars }
    }

    /// The fixed standard set, built once and shared.
    pub fn standard() -> &'static SeparatorSet {
        &STANDARD
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        // always false: from_chars rejects empty input
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::standard().clone()
    }
}
