//! # Number types
//!
//! Arbitrary precision integers and the pieces they are made of.
pub mod error;
pub mod integer;
pub mod sign;
