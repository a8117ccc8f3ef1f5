//! # Errors
//!
//! Reading a numeral can fail; these types describe how.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

/// A numeral could not be read.
///
/// Raised for an empty input, a lone sign, a character that is not a digit of the radix or an
/// unsupported radix.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Parse {
    description: String,
}

impl Parse {
    /// Create a new `Parse` error.
    ///
    /// # Arguments
    ///
    /// * `description`: A human readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl Error for Parse {}

/// Shorthand for the result of reading a numeral.
pub type ParseResult<T> = Result<T, Parse>;
