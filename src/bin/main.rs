use std::cmp::Ordering;
use std::error::Error;

use clap::Parser;
use log::debug;
use num::{Integer, ToPrimitive};

use relp_bigint::BigInteger;

/// Evaluate a single operation on two integers of arbitrary size.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Arguments {
    /// Left hand side
    #[clap(allow_hyphen_values = true)]
    lhs: String,
    /// One of + - * / % & | ^ << >> pow cmp gcd
    operator: String,
    /// Right hand side
    #[clap(allow_hyphen_values = true)]
    rhs: String,
    /// Radix of both the operands and the result
    #[clap(short, long, default_value_t = 10)]
    radix: u32,
}

/// Apply `operator` to the operands.
///
/// # Errors
///
/// When the operator is unknown, when dividing by zero or when the right hand side doesn't fit the
/// operator (shift amounts and exponents are bounded).
fn evaluate(lhs: &BigInteger, operator: &str, rhs: &BigInteger) -> Result<BigInteger, Box<dyn Error>> {
    let result = match operator {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => lhs.divmod(rhs)?.0,
        "%" => lhs.divmod(rhs)?.1,
        "&" => lhs & rhs,
        "|" => lhs | rhs,
        "^" => lhs ^ rhs,
        "<<" | ">>" => {
            let bits = rhs.to_isize().ok_or_else(|| format!("shift amount {} is too large", rhs))?;
            if operator == "<<" { lhs << bits } else { lhs >> bits }
        },
        "pow" => {
            let exponent = rhs.to_u32()
                .ok_or_else(|| format!("exponent {} should be a non negative 32 bit integer", rhs))?;
            lhs.pow(exponent)
        },
        "cmp" => BigInteger::from(match lhs.cmp(rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }),
        "gcd" => lhs.gcd(rhs),
        other => return Err(format!("unknown operator \"{}\"", other).into()),
    };

    Ok(result)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let arguments = Arguments::parse();
    debug!("{:?}", arguments);

    let lhs = BigInteger::from_str_radix(&arguments.lhs, arguments.radix)?;
    let rhs = BigInteger::from_str_radix(&arguments.rhs, arguments.radix)?;
    let result = evaluate(&lhs, &arguments.operator, &rhs)?;
    println!("{}", result.to_str_radix(arguments.radix));

    Ok(())
}
