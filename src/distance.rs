//! Hamming distance between equal-length words.
//!
//! Lengths are measured in `char`s, so words outside ASCII compare
//! position by position the same way ASCII words do.

use crate::error::{LadderError, Result};

/// Count the positions at which `a` and `b` differ.
///
/// Returns [`LadderError::LengthMismatch`] when the words have different
/// lengths. No sentinel value is ever returned.
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut distance = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => distance += usize::from(x != y),
            (None, None) => return Ok(distance),
            _ => {
                return Err(LadderError::LengthMismatch {
                    left: a.to_string(),
                    right: b.to_string(),
                })
            }
        }
    }
}

/// Check whether `a` and `b` differ in exactly one position.
///
/// Stops at the second mismatch. Words of different lengths are never
/// one apart.
pub fn is_one_apart(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut mismatches = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    mismatches += 1;
                    if mismatches > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return mismatches == 1,
            _ => return false,
        }
    }
}
