//! # Operators
//!
//! Every binary operator is implemented once, for an owned left hand side and a borrowed right hand
//! side, such that the storage of the left hand side can be reused. The other combinations forward
//! to that implementation.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::data::number_types::integer::big::BigInteger;

macro_rules! binop_from_assign {
    (impl $imp:ident for $res:ty, $method:ident, $method_assign:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(mut self, other: &$res) -> $res {
                self.$method_assign(other);
                self
            }
        }
    }
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(self, &other)
            }
        }
    }
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(self, &other)
            }
        }
    }
}

macro_rules! forward_ref_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a, 'b> $imp<&'b $res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $imp::$method(self.clone(), other)
            }
        }
    }
}

macro_rules! forward_val_assign {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                self.$method(&other);
            }
        }
    }
}

macro_rules! all_forms {
    (impl $imp:ident, $imp_assign:ident for $res:ty, $method:ident, $method_assign:ident) => {
        binop_from_assign!(impl $imp for $res, $method, $method_assign);
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
        forward_ref_ref_binop!(impl $imp for $res, $method);
        forward_val_assign!(impl $imp_assign for $res, $method_assign);
    }
}

impl<'a> AddAssign<&'a BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        self.add_assign_ref(rhs);
    }
}

impl<'a> SubAssign<&'a BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        self.sub_assign_ref(rhs);
    }
}

impl<'a> MulAssign<&'a BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        *self = self.mul_ref(rhs);
    }
}

/// # Panics
///
/// When dividing by zero, like the primitive integers do.
impl<'a> DivAssign<&'a BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        match self.divmod(rhs) {
            Ok((quotient, _)) => *self = quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

/// # Panics
///
/// When dividing by zero, like the primitive integers do.
impl<'a> RemAssign<&'a BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        match self.divmod(rhs) {
            Ok((_, remainder)) => *self = remainder,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a> BitAndAssign<&'a BigInteger> for BigInteger {
    fn bitand_assign(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |left, right| left & right);
    }
}

impl<'a> BitOrAssign<&'a BigInteger> for BigInteger {
    fn bitor_assign(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |left, right| left | right);
    }
}

impl<'a> BitXorAssign<&'a BigInteger> for BigInteger {
    fn bitxor_assign(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |left, right| left ^ right);
    }
}

all_forms!(impl Add, AddAssign for BigInteger, add, add_assign);
all_forms!(impl Sub, SubAssign for BigInteger, sub, sub_assign);
all_forms!(impl Mul, MulAssign for BigInteger, mul, mul_assign);
all_forms!(impl Div, DivAssign for BigInteger, div, div_assign);
all_forms!(impl Rem, RemAssign for BigInteger, rem, rem_assign);
all_forms!(impl BitAnd, BitAndAssign for BigInteger, bitand, bitand_assign);
all_forms!(impl BitOr, BitOrAssign for BigInteger, bitor, bitor_assign);
all_forms!(impl BitXor, BitXorAssign for BigInteger, bitxor, bitxor_assign);

impl Neg for BigInteger {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Not for BigInteger {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.not_assign();
        self
    }
}

impl<'a> Not for &'a BigInteger {
    type Output = BigInteger;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

/// A negative number of bits shifts to the right.
impl ShlAssign<isize> for BigInteger {
    fn shl_assign(&mut self, bits: isize) {
        if bits < 0 {
            self.shift_right(bits.unsigned_abs());
        } else {
            self.shift_left(bits as usize);
        }
    }
}

/// A negative number of bits shifts to the left.
impl ShrAssign<isize> for BigInteger {
    fn shr_assign(&mut self, bits: isize) {
        if bits < 0 {
            self.shift_left(bits.unsigned_abs());
        } else {
            self.shift_right(bits as usize);
        }
    }
}

impl Shl<isize> for BigInteger {
    type Output = Self;

    fn shl(mut self, bits: isize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl<'a> Shl<isize> for &'a BigInteger {
    type Output = BigInteger;

    fn shl(self, bits: isize) -> Self::Output {
        self.clone() << bits
    }
}

impl Shr<isize> for BigInteger {
    type Output = Self;

    fn shr(mut self, bits: isize) -> Self::Output {
        self >>= bits;
        self
    }
}

impl<'a> Shr<isize> for &'a BigInteger {
    type Output = BigInteger;

    fn shr(self, bits: isize) -> Self::Output {
        self.clone() >> bits
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item=&'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::from_digit(1), |total, value| total * value)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item=&'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::from_digit(1), |total, value| total * value)
    }
}
