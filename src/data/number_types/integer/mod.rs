//! # Integers
//!
//! Word types and arbitrary precision integers built from them.
use std::cmp::Ordering;

pub mod big;

/// A single word of a big integer.
pub type Digit = u64;
/// Twice as wide as a `Digit`, holds the intermediate values of word by word arithmetic.
pub type DoubleDigit = u128;

/// Number of bits in a `Digit`.
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Compare two sequences of words of the same sign, stored least significant first.
///
/// Both sequences should be normalized: the most significant word is not a redundant extension
/// word.
pub(crate) fn cmp_words(a: &[Digit], b: &[Digit]) -> Ordering {
    debug_assert!(!a.is_empty() && !b.is_empty());

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}
