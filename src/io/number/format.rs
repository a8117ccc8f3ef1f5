//! # Writing numerals
use std::fmt;

use crate::data::number_types::integer::Digit;
use crate::data::number_types::integer::big::BigInteger;
use crate::io::number::RADICES;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl BigInteger {
    /// Write the value as a numeral in the given radix.
    ///
    /// There are no leading zeros and a `-` precedes negative values only.
    ///
    /// # Panics
    ///
    /// If the radix is not between 2 and 36 inclusive.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(RADICES.contains(&radix), "radix {} is not between 2 and 36", radix);

        let magnitude = self.magnitude_to_str_radix(radix);
        if self.is_negative() {
            format!("-{}", magnitude)
        } else {
            magnitude
        }
    }

    /// Digits of the absolute value.
    ///
    /// The magnitude is repeatedly divided by the largest power of the radix that fits in a word,
    /// each remainder then gives a group of digits.
    fn magnitude_to_str_radix(&self, radix: u32) -> String {
        let radix = radix as Digit;
        let (group, group_len) = digit_group(radix);

        let mut reversed = Vec::new();
        let mut magnitude = self.abs();
        loop {
            let (quotient, mut remainder) = magnitude.divmod_digit(group);
            magnitude = quotient;
            let is_last = magnitude.is_zero();

            // Groups other than the most significant one are padded with zeros.
            for _ in 0..group_len {
                reversed.push(DIGITS[(remainder % radix) as usize]);
                remainder /= radix;
                if is_last && remainder == 0 {
                    break;
                }
            }

            if is_last {
                break;
            }
        }

        reversed.iter().rev().map(|&digit| digit as char).collect()
    }
}

/// Largest power of the radix that fits in a word, and the exponent.
fn digit_group(radix: Digit) -> (Digit, usize) {
    let mut group = radix;
    let mut group_len = 1;
    while let Some(next) = group.checked_mul(radix) {
        group = next;
        group_len += 1;
    }

    (group, group_len)
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_str_radix(10))
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_to_str_radix(16))
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_to_str_radix(16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_to_str_radix(8))
    }
}

impl fmt::Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_to_str_radix(2))
    }
}
