//! # Textual input and output
//!
//! Reading numerals into big integers, writing them back out and what can go wrong doing so.
pub mod error;
pub mod number;
