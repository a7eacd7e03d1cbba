//! Ladder results and ladder validation.

use crate::distance::is_one_apart;
use std::fmt;

/// A sequence of words where each adjacent pair differs in one position.
///
/// An empty ladder means no connecting path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder(Vec<String>);

impl Ladder {
    /// The ladder that represents "no path exists".
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }

    /// Number of words, including both ends.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of single-letter changes (edges), zero when empty.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        is_valid_ladder(&self.0)
    }
}

impl From<Vec<String>> for Ladder {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Check that `sequence` is a genuine ladder: at least two words, each
/// consecutive pair at Hamming distance exactly 1.
pub fn is_valid_ladder<S: AsRef<str>>(sequence: &[S]) -> bool {
    sequence.len() >= 2
        && sequence
            .windows(2)
            .all(|pair| is_one_apart(pair[0].as_ref(), pair[1].as_ref()))
}
