//! # Numerals
//!
//! Conversion between big integers and their textual representation in radices 2 through 36.
use std::ops::RangeInclusive;

mod format;
mod parse;

/// Radices that numerals can be read and written in, digits are `0-9` followed by `a-z`.
pub const RADICES: RangeInclusive<u32> = 2..=36;
