//! # Arbitrary precision integers
//!
//! Signed integers of unbounded magnitude, stored in two's complement form as a finite prefix of
//! words followed by an implicit, infinitely repeated sign word.
//!
//! Copying a [`BigInteger`] is cheap: the words live in a [`DigitSequence`], which keeps a single
//! word inline and shares larger arrays between copies until one of them is written to.
//!
//! ```
//! use relp_bigint::BigInteger;
//!
//! let a: BigInteger = "1000000000000000000000".parse().unwrap();
//! let b = BigInteger::from(-7);
//! assert_eq!((&a * &b).to_string(), "-7000000000000000000000");
//! assert_eq!((&a % &b).to_string(), "6");
//! ```
pub use data::digits::DigitSequence;
pub use data::number_types::error::DivisionByZero;
pub use data::number_types::integer::{Digit, DoubleDigit, DIGIT_BITS};
pub use data::number_types::integer::big::BigInteger;
pub use data::number_types::sign::Sign;
pub use io::error::{Parse as ParseError, ParseResult};

pub mod data;
pub mod io;
