use std::cmp::Ordering;
use std::ops::Mul;

use crate::data::number_types::integer::Digit;

/// Sign of a two's complement integer.
///
/// Unlike the sign of `num`, zero doesn't get its own variant: in two's complement notation, zero
/// has the sign (bit) of the non negative numbers.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    NonNegative,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// The word that a number of this sign is extended with.
    pub fn word(self) -> Digit {
        match self {
            Sign::NonNegative => 0,
            Sign::Negative => Digit::MAX,
        }
    }

    /// Read the sign of a sign extension word.
    ///
    /// The word should be either all zeros or all ones.
    pub fn from_word(word: Digit) -> Self {
        debug_assert!(word == 0 || word == Digit::MAX);

        if word == 0 {
            Sign::NonNegative
        } else {
            Sign::Negative
        }
    }
}

impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sign of the product, or quotient, of two numbers with these signs.
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_word(self.word() ^ rhs.word())
    }
}
