//! # Big integers
//!
//! Signed integers of arbitrary size in two's complement notation.
//!
//! A value is stored as a sequence of words, least significant first, followed by infinitely many
//! copies of a sign word. That sign word is either all zeros (non negative values) or all ones
//! (negative values) and is never stored; reading beyond the stored words yields it. All
//! algorithms read through [`BigInteger::get_digit`] and are because of that oblivious to where the
//! stored prefix ends.
use std::cmp::Ordering;

use crate::data::digits::DigitSequence;
use crate::data::number_types::integer::{cmp_words, Digit, DIGIT_BITS};
use crate::data::number_types::sign::Sign;

mod arithmetic;
mod bitwise;
mod macros;
mod ops;
mod traits;

/// An integer of unbounded magnitude.
///
/// Cloning is cheap: the words are shared with the clone until either one is modified.
///
/// # Representation
///
/// The stored words are normalized: there is at least one word, and the most significant one
/// differs from the sign word unless it is the only one. The value `-2^64`, for example, is the
/// single word `0` with a sign word of all ones. Every value has exactly one normalized
/// representation, which is why equality can compare the fields directly.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigInteger {
    /// Implicit extension of `digits`, either `0` or `Digit::MAX`.
    sign: Digit,
    /// Least significant first, never empty.
    digits: DigitSequence<Digit>,
}

impl BigInteger {
    /// The value `0`.
    pub fn zero() -> Self {
        Self::from_digit(0)
    }

    /// A non negative value of a single word.
    pub fn from_digit(value: Digit) -> Self {
        Self { sign: 0, digits: DigitSequence::new(value) }
    }

    fn from_unsigned(value: u128) -> Self {
        let mut digits = DigitSequence::new(value as Digit);
        let high = (value >> DIGIT_BITS) as Digit;
        if high != 0 {
            digits.push_back(high);
        }

        Self { sign: 0, digits }
    }

    fn from_signed(value: i128) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative }.word();

        let mut digits = DigitSequence::new(value as Digit);
        let high = (value >> DIGIT_BITS) as Digit;
        if high != sign {
            digits.push_back(high);
        }

        Self { sign, digits }
    }

    /// Word `index` of the infinite two's complement representation.
    ///
    /// Beyond the stored words, this is the sign word.
    pub fn get_digit(&self, index: usize) -> Digit {
        self.digits.as_slice().get(index).copied().unwrap_or(self.sign)
    }

    /// The stored words, least significant first.
    ///
    /// There is always at least one.
    pub fn digits(&self) -> &[Digit] {
        self.digits.as_slice()
    }

    /// The word the stored words are implicitly extended with.
    pub fn sign_word(&self) -> Digit {
        self.sign
    }

    /// Whether the value is below zero or not.
    pub fn sign(&self) -> Sign {
        Sign::from_word(self.sign)
    }

    /// Number of stored words.
    pub(crate) fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_negative(&self) -> bool {
        self.sign != 0
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0 && self.digits() == [0]
    }

    /// Whether the value is a multiple of two.
    pub fn is_even(&self) -> bool {
        self.get_digit(0) & 1 == 0
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            let mut result = self.clone();
            result.negate();
            result
        } else {
            self.clone()
        }
    }

    /// Remove redundant most significant words.
    ///
    /// Should be called by every operation that can leave copies of the sign word at the end of
    /// the stored words.
    fn cut(&mut self) {
        debug_assert!(self.sign == 0 || self.sign == Digit::MAX);
        debug_assert!(!self.digits.is_empty());

        while self.digits.len() > 1 && *self.digits.back() == self.sign {
            self.digits.pop_back();
        }
    }

    /// Whether the stored words are normalized.
    #[cfg(test)]
    fn is_normalized(&self) -> bool {
        (self.sign == 0 || self.sign == Digit::MAX)
            && !self.digits.is_empty()
            && (self.digits.len() == 1 || *self.digits.back() != self.sign)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_unsigned {
    ($t:ident) => {
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                Self::from_unsigned(value as u128)
            }
        }
    }
}

from_unsigned!(u8);
from_unsigned!(u16);
from_unsigned!(u32);
from_unsigned!(u64);
from_unsigned!(u128);
from_unsigned!(usize);

macro_rules! from_signed {
    ($t:ident) => {
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                Self::from_signed(value as i128)
            }
        }
    }
}

from_signed!(i8);
from_signed!(i16);
from_signed!(i32);
from_signed!(i64);
from_signed!(i128);
from_signed!(isize);

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            // A negative number with more words is further away from zero. Numbers of the same
            // sign and with the same number of words compare as unsigned words would.
            Ordering::Equal => match self.sign() {
                Sign::NonNegative => cmp_words(self.digits(), other.digits()),
                Sign::Negative => match self.len().cmp(&other.len()) {
                    Ordering::Equal => cmp_words(self.digits(), other.digits()),
                    ordering => ordering.reverse(),
                },
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
