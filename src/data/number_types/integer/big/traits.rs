//! # Traits of the `num` crate
//!
//! Allows using `BigInteger` in code that is generic over number types, such as `num::Ratio`.
use num::{CheckedDiv, FromPrimitive, Integer, Num, One, Signed, ToPrimitive, Zero};
use num::traits::{CheckedRem, Pow};

use crate::data::number_types::integer::{Digit, DIGIT_BITS};
use crate::data::number_types::integer::big::BigInteger;
use crate::io::error::Parse;

impl Zero for BigInteger {
    fn zero() -> Self {
        BigInteger::zero()
    }

    fn set_zero(&mut self) {
        *self = BigInteger::zero();
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self::from_digit(1)
    }

    fn is_one(&self) -> bool {
        self.sign == 0 && self.digits() == [1]
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = Parse;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        BigInteger::from_str_radix(text, radix)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if BigInteger::is_negative(self) {
            Self::from(-1)
        } else if BigInteger::is_zero(self) {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn is_positive(&self) -> bool {
        !BigInteger::is_negative(self) && !BigInteger::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl Integer for BigInteger {
    fn div_floor(&self, other: &Self) -> Self {
        self.div_mod_floor(other).0
    }

    fn mod_floor(&self, other: &Self) -> Self {
        self.div_mod_floor(other).1
    }

    /// Round the quotient towards negative infinity, the remainder has the sign of `other`.
    fn div_mod_floor(&self, other: &Self) -> (Self, Self) {
        let (mut quotient, mut remainder) = self.div_rem(other);
        if !remainder.is_zero() && remainder.is_negative() != other.is_negative() {
            quotient -= &Self::one();
            remainder += other;
        }

        (quotient, remainder)
    }

    /// Greatest common divisor by Euclid's algorithm, never negative.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = BigInteger::abs(self);
        let mut b = BigInteger::abs(other);
        while !b.is_zero() {
            let remainder = &a % &b;
            a = b;
            b = remainder;
        }

        a
    }

    /// Lowest common multiple, never negative.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        BigInteger::abs(&(self / &self.gcd(other) * other))
    }

    fn divides(&self, other: &Self) -> bool {
        self.is_multiple_of(other)
    }

    fn is_multiple_of(&self, other: &Self) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }

        (self % other).is_zero()
    }

    fn is_even(&self) -> bool {
        BigInteger::is_even(self)
    }

    fn is_odd(&self) -> bool {
        !BigInteger::is_even(self)
    }

    /// Truncating division, see `BigInteger::divmod`.
    ///
    /// # Panics
    ///
    /// When `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        match self.divmod(other) {
            Ok(result) => result,
            Err(error) => panic!("{}", error),
        }
    }
}

impl CheckedDiv for BigInteger {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.divmod(v).ok().map(|(quotient, _)| quotient)
    }
}

impl CheckedRem for BigInteger {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.divmod(v).ok().map(|(_, remainder)| remainder)
    }
}

impl Pow<u32> for BigInteger {
    type Output = Self;

    fn pow(self, exponent: u32) -> Self::Output {
        BigInteger::pow(&self, exponent)
    }
}

impl<'a> Pow<u32> for &'a BigInteger {
    type Output = BigInteger;

    fn pow(self, exponent: u32) -> Self::Output {
        BigInteger::pow(self, exponent)
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|value| value.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|value| value.to_u64())
    }

    /// Fits if at most two words are stored and the sign bit of those words agrees with the sign.
    fn to_i128(&self) -> Option<i128> {
        if self.len() > 2 {
            return None;
        }

        let value = self.two_lowest_words() as i128;
        if (value < 0) == BigInteger::is_negative(self) {
            Some(value)
        } else {
            None
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.len() > 2 || BigInteger::is_negative(self) {
            None
        } else {
            Some(self.two_lowest_words())
        }
    }
}

impl BigInteger {
    fn two_lowest_words(&self) -> u128 {
        ((self.get_digit(1) as u128) << DIGIT_BITS) | self.get_digit(0) as u128
    }
}

impl FromPrimitive for BigInteger {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n as Digit))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }
}
