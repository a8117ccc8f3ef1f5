//! # Oracle
//!
//! Every operation is compared against `num::BigInt` on values around word boundaries, through
//! their decimal representation.
use std::cmp::Ordering;

use num::{BigInt, Integer, One, ToPrimitive, Zero};

use relp_bigint::BigInteger;

fn corpus() -> Vec<String> {
    let mut values = [
        "0",
        "1",
        "2",
        "3",
        "7",
        "12345678901234567890123456789",
        "98765432109876543210987654321098765432109876543210",
        "340282366920938463463374607431768211455340282366920938463463374607431768211455",
    ]
        .iter()
        .flat_map(|value| vec![value.to_string(), format!("-{}", value)])
        .filter(|value| value != "-0")
        .collect::<Vec<_>>();

    for &exponent in &[31_usize, 32, 63, 64, 65, 127, 128, 129, 191, 192, 255] {
        let power = BigInt::one() << exponent;
        for value in vec![&power - BigInt::one(), power.clone(), &power + BigInt::one()] {
            values.push(value.to_string());
            values.push((-value).to_string());
        }
    }

    values.sort();
    values.dedup();
    values
}

fn both(text: &str) -> (BigInteger, BigInt) {
    (text.parse().unwrap(), text.parse().unwrap())
}

#[test]
fn parse_and_display() {
    for text in corpus() {
        let (value, expected) = both(&text);
        assert_eq!(value.to_string(), text);
        assert_eq!(value.to_string(), expected.to_string());
    }
}

#[test]
fn radices() {
    for text in corpus() {
        let (value, expected) = both(&text);
        for &radix in &[2, 3, 8, 10, 16, 36] {
            let written = expected.to_str_radix(radix);
            assert_eq!(value.to_str_radix(radix), written, "{} in radix {}", text, radix);
            assert_eq!(BigInteger::from_str_radix(&written, radix), Ok(value.clone()));
        }
        assert_eq!(format!("{:x}", value), format!("{:x}", expected));
        assert_eq!(format!("{:#X}", value), format!("{:#X}", expected));
        assert_eq!(format!("{:o}", value), format!("{:o}", expected));
        assert_eq!(format!("{:#b}", value), format!("{:#b}", expected));
        assert_eq!(format!("{:>90}", value), format!("{:>90}", expected));
        assert_eq!(format!("{:+}", value), format!("{:+}", expected));
    }
}

#[test]
fn primitives() {
    for text in corpus() {
        let (value, expected) = both(&text);
        assert_eq!(value.to_i64(), expected.to_i64(), "{}", text);
        assert_eq!(value.to_u64(), expected.to_u64(), "{}", text);
        assert_eq!(value.to_i128(), expected.to_i128(), "{}", text);
        assert_eq!(value.to_u128(), expected.to_u128(), "{}", text);
    }
}

#[test]
fn binary_operators() {
    let values = corpus();
    for left in &values {
        for right in &values {
            let (x, p) = both(left);
            let (y, q) = both(right);

            macro_rules! test {
                ($operator:tt) => {
                    assert_eq!(
                        (&x $operator &y).to_string(),
                        (&p $operator &q).to_string(),
                        "{} {} {}", left, stringify!($operator), right,
                    );
                };
            }

            test!(+);
            test!(-);
            test!(*);
            test!(&);
            test!(|);
            test!(^);
            assert_eq!(x.cmp(&y), p.cmp(&q), "{} cmp {}", left, right);
            assert_eq!(x == y, left == right);

            if !q.is_zero() {
                test!(/);
                test!(%);
                assert_eq!(x.div_floor(&y).to_string(), p.div_floor(&q).to_string());
                assert_eq!(x.mod_floor(&y).to_string(), p.mod_floor(&q).to_string());
            }
            assert_eq!(x.gcd(&y).to_string(), p.gcd(&q).to_string(), "gcd({}, {})", left, right);
        }
    }
}

#[test]
fn shifts() {
    for text in corpus() {
        let (value, expected) = both(&text);
        for &bits in &[0_usize, 1, 2, 31, 63, 64, 65, 127, 128, 130, 300] {
            assert_eq!(
                (&value << bits as isize).to_string(),
                (&expected << bits).to_string(),
                "{} << {}", text, bits,
            );
            assert_eq!(
                (&value >> bits as isize).to_string(),
                (&expected >> bits).to_string(),
                "{} >> {}", text, bits,
            );
        }
    }
}

#[test]
fn unary_operators() {
    for text in corpus() {
        let (value, expected) = both(&text);
        assert_eq!((-&value).to_string(), (-&expected).to_string());
        assert_eq!((!&value).to_string(), (!&expected).to_string());
        assert_eq!(value.abs().to_string(), num::Signed::abs(&expected).to_string());
        assert_eq!(
            value.is_negative(),
            expected.cmp(&BigInt::zero()) == Ordering::Less,
        );
    }
}

#[test]
fn powers() {
    for text in &["0", "1", "-1", "2", "-3", "18446744073709551615", "-18446744073709551616"] {
        let (value, expected) = both(text);
        for exponent in 0..12 {
            assert_eq!(
                value.pow(exponent).to_string(),
                num::pow(expected.clone(), exponent as usize).to_string(),
                "{} ^ {}", text, exponent,
            );
        }
    }
}
