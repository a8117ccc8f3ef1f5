//! # Data structures
//!
//! Word storage and the number types built on top of it.
pub mod digits;
pub mod number_types;
