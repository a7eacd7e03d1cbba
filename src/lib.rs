//! # Word Ladder
//!
//! Finds a shortest word ladder between two words of equal length: a chain
//! of dictionary words where each consecutive pair differs in exactly one
//! position.
//!
//! The dictionary is filtered to one word length into a [`Lexicon`], and a
//! breadth-first search over the implicit one-letter-change graph returns a
//! minimum-length [`Ladder`].
//!
//! ```
//! use word_ladder::{find_shortest_ladder, is_valid_ladder, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["cat", "cot", "cog", "dog", "cop"], 3);
//! let ladder = find_shortest_ladder(&lexicon, "CAT", "DOG");
//!
//! assert_eq!(ladder.steps(), 3);
//! assert!(is_valid_ladder(ladder.words()));
//! ```

pub mod distance;
pub mod error;
pub mod ladder;
pub mod lexicon;
pub mod search;

pub use distance::{hamming_distance, is_one_apart};
pub use error::{LadderError, Result};
pub use ladder::{is_valid_ladder, Ladder};
pub use lexicon::{normalize_word, Lexicon, NeighborStrategy};
pub use search::{find_shortest_ladder, LadderSearch, SearchReport};
