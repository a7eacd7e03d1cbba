//! The fixed-length word set a ladder search runs over.
//!
//! A [`Lexicon`] is built once from a dictionary source and is read-only
//! afterwards. Every member is uppercased on the way in and has exactly
//! the word length chosen at construction.

use crate::distance::is_one_apart;
use crate::error::{LadderError, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// How [`Lexicon::neighbors`] discovers words one substitution away.
///
/// Both strategies return the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategy {
    /// Compare the word against every lexicon member. O(L·N).
    #[default]
    Scan,
    /// Try every single-position substitution drawn from the lexicon
    /// alphabet and test each for membership. O(N·A·log L).
    Substitution,
}

/// Normalize a query word to the lexicon's canonical case.
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase()
}

/// An immutable set of unique, uppercased words of one length.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: BTreeSet<String>,
    alphabet: BTreeSet<char>,
    word_length: usize,
    strategy: NeighborStrategy,
}

impl Lexicon {
    /// Build a lexicon from an in-memory token source, keeping only tokens
    /// of `word_length` chars.
    pub fn from_words<I, S>(tokens: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::empty(word_length);
        for token in tokens {
            lexicon.insert(token.as_ref());
        }
        lexicon
    }

    /// Read whitespace-delimited tokens from `reader`.
    ///
    /// Tokens that are not valid UTF-8 are skipped; only a failing read is
    /// an error.
    pub fn from_reader<R: BufRead>(mut reader: R, word_length: usize) -> Result<Self> {
        let mut lexicon = Self::empty(word_length);
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? != 0 {
            for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                match std::str::from_utf8(token) {
                    Ok(text) => {
                        for word in text.split_whitespace() {
                            lexicon.insert(word);
                        }
                    }
                    Err(_) => debug!(
                        token = %String::from_utf8_lossy(token),
                        "skipping token that is not valid UTF-8"
                    ),
                }
            }
            line.clear();
        }
        Ok(lexicon)
    }

    /// Load the dictionary file at `path`.
    ///
    /// Any open or read failure is reported as [`LadderError::Dictionary`];
    /// a partially read file never yields a lexicon.
    pub fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let dictionary_error = |source| LadderError::Dictionary {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(dictionary_error)?;
        let lexicon = match Self::from_reader(BufReader::new(file), word_length) {
            Ok(lexicon) => lexicon,
            Err(LadderError::Io(source)) => return Err(dictionary_error(source)),
            Err(other) => return Err(other),
        };

        info!(
            path = %path.display(),
            word_length,
            size = lexicon.size(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Select the neighbor discovery strategy.
    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn empty(word_length: usize) -> Self {
        Self {
            words: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            word_length,
            strategy: NeighborStrategy::default(),
        }
    }

    fn insert(&mut self, token: &str) {
        if token.chars().count() != self.word_length {
            return;
        }
        let word = normalize_word(token);
        // Uppercasing can expand some chars (e.g. 'ß' -> "SS").
        if word.chars().count() != self.word_length {
            debug!(token, "dropping token whose uppercase form changes length");
            return;
        }
        self.alphabet.extend(word.chars());
        self.words.insert(word);
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn strategy(&self) -> NeighborStrategy {
        self.strategy
    }

    /// Number of words in the lexicon.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every distinct char appearing in some lexicon word, sorted.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Iterate over the words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Exact membership test. `word` must already be normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The lexicon's own copy of `word`, if it is a member.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// All lexicon words at Hamming distance exactly 1 from `word`, in
    /// lexicographic order, using the configured strategy.
    ///
    /// Empty when `word` is not itself a member.
    pub fn neighbors(&self, word: &str) -> BTreeSet<&str> {
        self.neighbors_with(word, self.strategy)
    }

    /// Like [`neighbors`](Self::neighbors) with an explicit strategy.
    pub fn neighbors_with(&self, word: &str, strategy: NeighborStrategy) -> BTreeSet<&str> {
        if !self.contains(word) {
            return BTreeSet::new();
        }
        match strategy {
            NeighborStrategy::Scan => self.scan_neighbors(word),
            NeighborStrategy::Substitution => self.substitution_neighbors(word),
        }
    }

    fn scan_neighbors(&self, word: &str) -> BTreeSet<&str> {
        self.iter()
            .filter(|candidate| is_one_apart(word, candidate))
            .collect()
    }

    fn substitution_neighbors(&self, word: &str) -> BTreeSet<&str> {
        let mut chars: Vec<char> = word.chars().collect();
        let mut found = BTreeSet::new();
        let mut candidate = String::with_capacity(word.len());

        for i in 0..chars.len() {
            let original = chars[i];
            for &replacement in &self.alphabet {
                if replacement == original {
                    continue;
                }
                chars[i] = replacement;
                candidate.clear();
                candidate.extend(chars.iter());
                if let Some(hit) = self.words.get(candidate.as_str()) {
                    found.insert(hit.as_str());
                }
            }
            chars[i] = original;
        }

        found
    }
}
