use criterion::criterion_main;

mod conversion;

criterion_main!(arithmetic::arithmetic, conversion::conversion);
