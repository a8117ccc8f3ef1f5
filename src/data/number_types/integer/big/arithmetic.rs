//! # Arithmetic
//!
//! Addition by rippling carries, negation in two's complement, schoolbook multiplication and long
//! division.
use std::cmp::max;
use std::mem;

use log::{debug, trace};

use crate::data::number_types::error::DivisionByZero;
use crate::data::number_types::integer::{Digit, DoubleDigit, DIGIT_BITS};
use crate::data::number_types::integer::big::BigInteger;
use crate::data::number_types::sign::Sign;

/// Base of the word representation, `2^DIGIT_BITS`.
const BASE: DoubleDigit = 1 << DIGIT_BITS;

impl BigInteger {
    /// Add in place.
    ///
    /// Two extra words are enough to hold any carry. The top one of them then is a pure sign
    /// extension word, and becomes the new sign.
    pub(super) fn add_assign_ref(&mut self, rhs: &Self) {
        let len = max(self.len(), rhs.len()) + 2;
        let sign = self.sign;
        self.digits.resize(len, sign);

        let mut carry = false;
        for (index, word) in self.digits.as_mut_slice().iter_mut().enumerate() {
            let (sum, first_overflow) = word.overflowing_add(rhs.get_digit(index));
            let (sum, second_overflow) = sum.overflowing_add(carry as Digit);
            *word = sum;
            carry = first_overflow || second_overflow;
        }

        self.sign = *self.digits.back();
        self.cut();
    }

    /// Add a single non negative word in place.
    pub(crate) fn add_digit(&mut self, value: Digit) {
        self.add_assign_ref(&Self::from_digit(value));
    }

    pub(super) fn sub_assign_ref(&mut self, rhs: &Self) {
        let mut negated = rhs.clone();
        negated.negate();
        self.add_assign_ref(&negated);
    }

    /// Flip every bit, the sign word included.
    ///
    /// This maps normalized values to normalized values.
    pub(super) fn not_assign(&mut self) {
        self.sign = !self.sign;
        for word in self.digits.as_mut_slice() {
            *word = !*word;
        }
    }

    /// Negate in place, `-x = !x + 1`.
    pub(crate) fn negate(&mut self) {
        self.not_assign();
        self.add_digit(1);
    }

    /// Multiply a non negative value by a single word in place.
    pub(crate) fn mul_digit_assign(&mut self, factor: Digit) {
        debug_assert!(!self.is_negative());

        let mut carry: Digit = 0;
        for word in self.digits.as_mut_slice() {
            let product = *word as DoubleDigit * factor as DoubleDigit + carry as DoubleDigit;
            *word = product as Digit;
            carry = (product >> DIGIT_BITS) as Digit;
        }
        if carry != 0 {
            self.digits.push_back(carry);
        }

        self.cut();
    }

    /// Multiply the magnitudes word by word and fix the sign afterwards.
    pub(super) fn mul_ref(&self, rhs: &Self) -> Self {
        let sign = self.sign() * rhs.sign();
        let mut short = self.abs();
        let mut long = rhs.abs();
        if short.len() > long.len() {
            mem::swap(&mut short, &mut long);
        }

        let mut result = Self::zero();
        for &word in short.digits() {
            let mut partial = long.clone();
            partial.mul_digit_assign(word);
            result.add_assign_ref(&partial);
            // Shift by one word for the next, more significant, word of `short`.
            long.digits.push_front(0, 1);
        }

        if sign == Sign::Negative {
            result.negate();
        }
        result
    }

    /// Divide a non negative value by a single word, returning the remainder.
    pub(crate) fn divmod_digit(mut self, divisor: Digit) -> (Self, Digit) {
        debug_assert!(!self.is_negative());
        debug_assert_ne!(divisor, 0);

        let mut remainder: Digit = 0;
        for word in self.digits.as_mut_slice().iter_mut().rev() {
            let current = ((remainder as DoubleDigit) << DIGIT_BITS) | *word as DoubleDigit;
            *word = (current / divisor as DoubleDigit) as Digit;
            remainder = (current % divisor as DoubleDigit) as Digit;
        }

        self.cut();
        (self, remainder)
    }

    /// Truncating division with remainder.
    ///
    /// The quotient is rounded towards zero, the remainder has the sign of the dividend (or is
    /// zero): `-7 = -3 * 2 + -1`.
    ///
    /// # Errors
    ///
    /// When `divisor` is zero.
    pub fn divmod(&self, divisor: &Self) -> Result<(Self, Self), DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }

        let quotient_sign = self.sign() * divisor.sign();
        let remainder_sign = self.sign();
        let (mut quotient, mut remainder) = Self::divmod_magnitudes(self.abs(), divisor.abs());

        if quotient_sign == Sign::Negative {
            quotient.negate();
        }
        if remainder_sign == Sign::Negative {
            remainder.negate();
        }

        Ok((quotient, remainder))
    }

    /// Long division of non negative values, most significant word first.
    ///
    /// Both values are first multiplied by `norm`, such that the most significant word of the
    /// divisor is at least half the base. Each quotient word estimated from the top two words of
    /// the running remainder is then at most two too large.
    fn divmod_magnitudes(mut dividend: Self, mut divisor: Self) -> (Self, Self) {
        debug_assert!(!dividend.is_negative() && !divisor.is_negative() && !divisor.is_zero());
        debug!("Dividing {} words by {} words", dividend.len(), divisor.len());

        if divisor.len() == 1 {
            let (quotient, remainder) = dividend.divmod_digit(divisor.digits[0]);
            return (quotient, Self::from_digit(remainder));
        }

        let norm = (BASE / (*divisor.digits.back() as DoubleDigit + 1)) as Digit;
        dividend.mul_digit_assign(norm);
        divisor.mul_digit_assign(norm);
        let divisor_len = divisor.len();
        let top = *divisor.digits.back() as DoubleDigit;
        debug_assert!(top >= BASE / 2);

        let mut quotient = Self::zero();
        quotient.digits.resize(dividend.len(), 0);
        let mut remainder = Self::zero();
        for index in (0..dividend.len()).rev() {
            remainder.digits.push_front(dividend.get_digit(index), 1);
            remainder.cut();

            let prefix = ((remainder.get_digit(divisor_len) as DoubleDigit) << DIGIT_BITS)
                | remainder.get_digit(divisor_len - 1) as DoubleDigit;
            let mut estimate = (prefix / top).min(Digit::MAX as DoubleDigit) as Digit;

            let mut product = divisor.clone();
            product.mul_digit_assign(estimate);
            remainder.sub_assign_ref(&product);

            let mut corrections = 0;
            while remainder.is_negative() {
                remainder.add_assign_ref(&divisor);
                estimate -= 1;
                corrections += 1;
            }
            if corrections > 0 {
                trace!("Quotient word {} needed {} corrections", index, corrections);
            }
            debug_assert!(corrections <= 2);

            quotient.digits[index] = estimate;
        }

        quotient.cut();
        let (remainder, rest) = remainder.divmod_digit(norm);
        debug_assert_eq!(rest, 0);

        (quotient, remainder)
    }

    /// Raise to a non negative power by repeated squaring.
    pub fn pow(&self, mut exponent: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::from_digit(1);
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul_ref(&base);
            }
        }

        result
    }
}
