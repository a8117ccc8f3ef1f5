//! # Algebraic laws
//!
//! Checked on pseudo random values of up to five words. Words are drawn with a bias towards the
//! edge cases of carry propagation and sign extension.
use relp_bigint::BigInteger;

/// Xorshift, deterministic such that failures can be reproduced.
struct Words(u64);

impl Words {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn word(&mut self) -> u64 {
        match self.next() % 6 {
            0 => 0,
            1 => u64::MAX,
            2 => 1 << 63,
            3 => (1 << 63) - 1,
            _ => self.next(),
        }
    }

    fn value(&mut self) -> BigInteger {
        let len = (self.next() % 5) as usize + 1;
        let mut value = BigInteger::zero();
        for _ in 0..len {
            value = (value << 64) + BigInteger::from(self.word());
        }
        if self.next() % 2 == 0 {
            value = -value;
        }
        value
    }

    fn values(&mut self, count: usize) -> Vec<BigInteger> {
        (0..count).map(|_| self.value()).collect()
    }
}

const SAMPLES: usize = 300;

#[test]
fn addition() {
    let mut words = Words(0x2545_F491_4F6C_DD1D);
    let zero = BigInteger::zero();
    for _ in 0..SAMPLES {
        let (a, b, c) = (words.value(), words.value(), words.value());
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a - &a, zero);
        assert_eq!(&a + -&a, zero);
        assert_eq!(&a - &b, -(&b - &a));
    }
}

#[test]
fn multiplication() {
    let mut words = Words(0x9E37_79B9_7F4A_7C15);
    for _ in 0..SAMPLES {
        let (a, b, c) = (words.value(), words.value(), words.value());
        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!(&a * BigInteger::from(-1), -&a);
    }
}

#[test]
fn division() {
    let mut words = Words(0xD1B5_4A32_D192_ED03);
    for _ in 0..SAMPLES {
        let (a, b) = (words.value() * words.value(), words.value());
        if b.is_zero() {
            continue;
        }

        let (quotient, remainder) = a.divmod(&b).unwrap();
        assert_eq!(&quotient * &b + &remainder, a);
        assert!(remainder.abs() < b.abs());
        if !remainder.is_zero() {
            assert_eq!(remainder.is_negative(), a.is_negative());
        }
        assert_eq!(&a / &b, quotient);
        assert_eq!(&a % &b, remainder);

        let (exact, rest) = (&a * &b).divmod(&b).unwrap();
        assert_eq!(exact, a);
        assert!(rest.is_zero());
    }
}

#[test]
fn text() {
    let mut words = Words(0x8CB9_2BA7_2F3D_8DD7);
    for value in words.values(SAMPLES) {
        let text = value.to_string();
        assert_eq!(text.parse::<BigInteger>(), Ok(value.clone()));
        assert!(!text.starts_with("-0") && (text == "0" || !text.starts_with('0')));
        assert_eq!(text.parse::<BigInteger>().unwrap().to_string(), text);
        for radix in 2..=36 {
            let written = value.to_str_radix(radix);
            assert_eq!(BigInteger::from_str_radix(&written, radix), Ok(value.clone()));
        }
    }
}

#[test]
fn bitwise() {
    let mut words = Words(0x6A09_E667_F3BC_C908);
    for _ in 0..SAMPLES {
        let (a, b) = (words.value(), words.value());
        assert_eq!(!!&a, a);
        assert_eq!(!(&a & &b), !&a | !&b);
        assert_eq!(!(&a | &b), !&a & !&b);
        assert_eq!(&a ^ &b, (&a | &b) & !(&a & &b));
        assert_eq!(!&a, -&a - BigInteger::from(1));
        assert_eq!(&a & &a, a);
        assert_eq!(&a ^ &a, BigInteger::zero());
    }
}

#[test]
fn shifts() {
    let mut words = Words(0xBB67_AE85_84CA_A73B);
    for _ in 0..SAMPLES {
        let a = words.value();
        let bits = (words.next() % 400) as isize;
        let power = BigInteger::from(1) << bits;

        assert_eq!((&a << bits) >> bits, a);
        assert_eq!(&a << bits, &a * &power);
        assert_eq!(&a >> -bits, &a << bits);
        // Arithmetic shifts round towards negative infinity.
        let shifted = &a >> bits;
        assert!(&shifted * &power <= a);
        assert!(a < (&shifted + BigInteger::from(1)) * &power);
    }
}

#[test]
fn ordering() {
    let mut words = Words(0x3C6E_F372_FE94_F82B);
    let mut values = words.values(SAMPLES);
    values.sort();
    for pair in values.windows(2) {
        assert!(!(&pair[1] - &pair[0]).is_negative());
    }
}

#[test]
fn copies_do_not_interfere() {
    let mut words = Words(0xA54F_F53A_5F1D_36F1);
    for _ in 0..SAMPLES {
        let a = words.value();
        let text = a.to_string();

        let mut b = a.clone();
        b += BigInteger::from(1);
        b <<= 3;
        b *= a.clone();
        drop(!b);

        assert_eq!(a.to_string(), text);
    }
}
