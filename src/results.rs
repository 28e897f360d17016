//! Scoring of found words.

use std::collections::HashSet;
use std::fmt;

use crate::MIN_WORD_LENGTH;

/// Points for a word of the given length (with `qu` counted as two letters).
///
/// | length | points |
/// |--------|--------|
/// | < 3    | 0      |
/// | 3, 4   | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | 8+     | 11     |
pub fn score(word: &str) -> u32 {
    match word.len() {
        len if len < MIN_WORD_LENGTH => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Summary of one search: how many words, how many points, and which words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Results {
    word_count: usize,
    total_score: u32,
    words: Vec<String>,
}

impl Results {
    /// Score a set of found words. Word order is unspecified.
    pub fn from_words(found: HashSet<String>) -> Self {
        let words: Vec<String> = found.into_iter().collect();
        Self {
            word_count: words.len(),
            total_score: words.iter().map(|w| score(w)).sum(),
            words,
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Words ordered by descending score, then alphabetically.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_by(|a, b| score(b).cmp(&score(a)).then_with(|| a.cmp(b)));
        words
    }
}

impl From<HashSet<String>> for Results {
    fn from(found: HashSet<String>) -> Self {
        Self::from_words(found)
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} points",
            self.word_count, self.total_score
        )
    }
}
