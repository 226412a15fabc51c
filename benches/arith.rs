extern crate criterion;

use criterion::*;
use dec_int::BigInt;

fn bench(c: &mut Criterion) {
    let a: BigInt = "9".repeat(512).into();
    let b: BigInt = "1234567890".repeat(50).into();
    let mut group = c.benchmark_group("schoolbook arithmetic");
    group.bench_function("add", |bencher| bencher.iter(|| &a + &b));
    group.bench_function("sub", |bencher| bencher.iter(|| &a - &b));
    group.bench_function("mul", |bencher| bencher.iter(|| &a * &b));
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
