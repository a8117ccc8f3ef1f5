use criterion::{black_box, Criterion, criterion_group};

use relp_bigint::BigInteger;

pub fn parse_decimal(c: &mut Criterion) {
    let text = "3141592653589793238462643383279502884197169399375105820974944592307816406286".repeat(4);
    c.bench_function("parse 300 decimal digits", |bencher| bencher.iter(|| {
        black_box(&text).parse::<BigInteger>()
    }));
}

pub fn format_decimal(c: &mut Criterion) {
    let value = BigInteger::from(7).pow(350);
    c.bench_function("format 7^350 in decimal", |bencher| bencher.iter(|| {
        black_box(&value).to_string()
    }));
}

pub fn format_hex(c: &mut Criterion) {
    let value = -BigInteger::from(7).pow(350);
    c.bench_function("format -7^350 in hexadecimal", |bencher| bencher.iter(|| {
        format!("{:x}", black_box(&value))
    }));
}

criterion_group!(conversion,
    parse_decimal,
    format_decimal,
    format_hex,
);
