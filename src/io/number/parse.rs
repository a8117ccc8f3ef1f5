//! # Reading numerals
use std::str::FromStr;

use crate::data::number_types::integer::Digit;
use crate::data::number_types::integer::big::BigInteger;
use crate::io::error::{Parse, ParseResult};
use crate::io::number::RADICES;

impl BigInteger {
    /// Read a numeral.
    ///
    /// The value is accumulated one digit at a time, `x = x * radix + digit`, and negated at the
    /// end if the numeral started with a minus sign.
    ///
    /// # Arguments
    ///
    /// * `text`: Digits, most significant first, optionally preceded by a `-`. Letters are
    /// accepted in both cases.
    /// * `radix`: Base of the numeral, between 2 and 36 inclusive.
    ///
    /// # Errors
    ///
    /// If the radix is not supported, there are no digits or a character is not a digit in the
    /// radix.
    pub fn from_str_radix(text: &str, radix: u32) -> ParseResult<Self> {
        if !RADICES.contains(&radix) {
            return Err(Parse::new(format!("Radix {} is not between 2 and 36.", radix)));
        }

        let (negative, digits) = match text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, text),
        };
        if digits.is_empty() {
            return Err(Parse::new(format!("Numeral \"{}\" contains no digits.", text)));
        }

        let mut value = Self::zero();
        for (position, character) in digits.chars().enumerate() {
            let digit = character.to_digit(radix)
                .ok_or_else(|| Parse::new(format!(
                    "Character '{}' at position {} of \"{}\" is not a digit in radix {}.",
                    character, position + negative as usize, text, radix,
                )))?;

            value.mul_digit_assign(radix as Digit);
            value.add_digit(digit as Digit);
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }
}

impl FromStr for BigInteger {
    type Err = Parse;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(text, 10)
    }
}
