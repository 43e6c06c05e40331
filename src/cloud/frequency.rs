use std::collections::BTreeMap;

use super::separators::SeparatorSet;
use super::tokenizer::{Token, Tokens};

/// Case-insensitive word counts accumulated across a whole document.
///
/// The table owns its entries for the document's lifetime: entries are
/// created with count 1, incremented on every later occurrence, and never
/// removed. Iteration order is lexicographic on the lowercased words; the
/// presentation order of a cloud is re-derived later by the selector.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
    separators: SeparatorSet,
}

impl FrequencyTable {
    /// An empty table using the standard separator set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: SeparatorSet) -> Self {
        FrequencyTable {
            counts: BTreeMap::new(),
            separators,
        }
    }

    /// Counts every word token of `line` into the table. State persists
    /// across calls, so feeding a document line by line accumulates totals
    /// for the whole document.
    pub fn accumulate_line(&mut self, line: &str) {
        for token in Tokens::new(line, &self.separators) {
            if let Token::Word(word) = token {
                *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
            }
        }
    }

    /// Convenience over [`accumulate_line`](Self::accumulate_line) for text
    /// held in memory.
    pub fn accumulate_text(&mut self, text: &str) {
        for line in text.lines() {
            self.accumulate_line(line);
        }
    }

    /// Number of distinct words seen so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The stored count for `word`, if the (lowercase) word has been seen.
    pub fn count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// All (word, count) pairs in lexicographic word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}
