use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vsl_foundation::{BoundedArray, BoundedString};

fn benchmark_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_array");
    let source: Vec<u32> = (0..64).collect();

    group.bench_function("assign_64", |b| {
        let mut array: BoundedArray<u32, 64> = BoundedArray::new();
        b.iter(|| array.assign(black_box(&source)));
    });

    group.bench_function("at_or_scan", |b| {
        let mut array: BoundedArray<u32, 64> = BoundedArray::new();
        let _ = array.assign(&source[..32]);
        b.iter(|| (0..64).map(|i| array.at_or(black_box(i), 0)).sum::<u32>());
    });

    group.finish();
}

fn benchmark_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_string");

    group.bench_function("assign_truncating", |b| {
        let mut string: BoundedString<16> = BoundedString::new();
        b.iter(|| string.assign(black_box(b"a fairly long sensor label")));
    });

    group.bench_function("push_back_until_full", |b| {
        b.iter(|| {
            let mut string: BoundedString<32> = BoundedString::new();
            while string.push_back(black_box(b'x')).is_ok() {}
            string
        });
    });

    group.bench_function("from_int", |b| {
        let mut string: BoundedString<11> = BoundedString::new();
        b.iter(|| string.from_int(black_box(i32::MIN + 1)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_array, benchmark_string);
criterion_main!(benches);
