//! # Arithmetic errors
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

/// A division or remainder was requested with a divisor equal to zero.
///
/// Reported before any work on the dividend is done.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("attempt to divide by zero")
    }
}

impl Error for DivisionByZero {}
