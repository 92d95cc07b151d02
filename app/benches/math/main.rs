/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use fxmath::{Fixed, exp2, log2, pow, sqrt};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let log_inputs: Vec<Fixed> = (1..1000).map(Fixed::from_int).collect();
    let exp_inputs: Vec<Fixed> = (1..1000)
        .filter_map(|i| Fixed::from_ratio(i - 500, 10))
        .collect();

    c.bench_function("pxfm: log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_log2(i as f64));
            }
        })
    });

    c.bench_function("fxmath: log2", |b| {
        b.iter(|| {
            for x in log_inputs.iter() {
                black_box(log2(x).ok());
            }
        })
    });

    c.bench_function("pxfm: exp2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_exp2((i - 500) as f64 / 10.));
            }
        })
    });

    c.bench_function("fxmath: exp2", |b| {
        b.iter(|| {
            for x in exp_inputs.iter() {
                black_box(exp2(x).ok());
            }
        })
    });

    c.bench_function("fxmath: sqrt", |b| {
        b.iter(|| {
            for x in log_inputs.iter() {
                black_box(sqrt(x).ok());
            }
        })
    });

    let exponent = Fixed::from_ratio(323221324312, 1000000000000).unwrap_or_default();

    c.bench_function("pxfm: pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_pow(i as f64, 0.323221324312f64));
            }
        })
    });

    c.bench_function("fxmath: pow", |b| {
        b.iter(|| {
            for x in log_inputs.iter() {
                black_box(pow(x, &exponent).ok());
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
