//! # Bitwise operations
//!
//! Operations on the infinite two's complement bit string. Shifts are arithmetic: shifting right
//! rounds towards negative infinity.
use std::cmp::max;

use crate::data::number_types::integer::{Digit, DIGIT_BITS};
use crate::data::number_types::integer::big::BigInteger;

impl BigInteger {
    /// Combine word by word, the sign words included.
    pub(super) fn bitwise_assign(&mut self, rhs: &Self, operation: impl Fn(Digit, Digit) -> Digit) {
        let sign = self.sign;
        self.digits.resize(max(self.len(), rhs.len()), sign);

        for (index, word) in self.digits.as_mut_slice().iter_mut().enumerate() {
            *word = operation(*word, rhs.get_digit(index));
        }
        self.sign = operation(sign, rhs.sign);

        self.cut();
    }

    /// Multiply by `2^bits`.
    pub(super) fn shift_left(&mut self, bits: usize) {
        let words = bits / DIGIT_BITS as usize;
        let offset = (bits % DIGIT_BITS as usize) as u32;

        self.digits.push_front(0, words);
        if offset > 0 {
            // Headroom for the bits moving out of the most significant word.
            let sign = self.sign;
            self.digits.push_back(sign);

            let mut carry = 0;
            for word in self.digits.as_mut_slice() {
                let old = *word;
                *word = (old << offset) | carry;
                carry = old >> (DIGIT_BITS - offset);
            }
        }

        self.cut();
    }

    /// Divide by `2^bits`, rounding towards negative infinity.
    pub(super) fn shift_right(&mut self, bits: usize) {
        let words = bits / DIGIT_BITS as usize;
        let offset = (bits % DIGIT_BITS as usize) as u32;

        if words >= self.len() {
            // Only sign bits remain.
            let sign = self.sign;
            self.digits.resize(1, sign);
            self.digits[0] = sign;
            return;
        }

        self.digits.pop_front(words);
        if offset > 0 {
            let mut carry = self.sign;
            for word in self.digits.as_mut_slice().iter_mut().rev() {
                let old = *word;
                *word = (carry << (DIGIT_BITS - offset)) | (old >> offset);
                carry = old;
            }
        }

        self.cut();
    }
}
