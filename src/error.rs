//! Error types for lexicon loading and distance computation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the word ladder core.
///
/// "No ladder exists" is not an error: it is an empty [`Ladder`](crate::Ladder).
#[derive(Debug, Error)]
pub enum LadderError {
    /// The dictionary file could not be opened or read.
    #[error("unable to read dictionary file {}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-file dictionary source failed while reading.
    #[error("dictionary read failed")]
    Io(#[from] std::io::Error),

    /// Hamming distance was requested between words of different lengths.
    #[error("cannot compare words of different lengths: {left:?} and {right:?}")]
    LengthMismatch { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, LadderError>;
