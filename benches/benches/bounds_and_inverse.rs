// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size, Vec2};
use matboard_layout::affine::{invert, to_local};
use matboard_layout::bounds::{absolute_bounds, union_bounds};

fn gen_transforms(n: usize) -> Vec<Affine> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Affine::translate(Vec2::new(t * 3.0, t * 7.0))
                * Affine::rotate(t * 0.01)
                * Affine::scale_non_uniform(1.0 + t * 0.001, 1.0)
        })
        .collect()
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    let transforms = gen_transforms(1024);
    let size = Size::new(400.0, 600.0);
    group.throughput(Throughput::Elements(transforms.len() as u64));
    group.bench_function("absolute_bounds_n1024", |b| {
        b.iter(|| {
            for &m in &transforms {
                black_box(absolute_bounds(black_box(m), size));
            }
        })
    });
    group.bench_function("union_bounds_n1024", |b| {
        b.iter(|| {
            let u = union_bounds(transforms.iter().map(|&m| absolute_bounds(m, size)));
            black_box(u);
        })
    });
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let transforms = gen_transforms(1024);
    group.throughput(Throughput::Elements(transforms.len() as u64));
    group.bench_function("invert_n1024", |b| {
        b.iter(|| {
            for &m in &transforms {
                let _ = black_box(invert(black_box(m)));
            }
        })
    });
    group.bench_function("to_local_n1024", |b| {
        let p = Point::new(250.0, 125.0);
        b.iter(|| {
            for &m in &transforms {
                let _ = black_box(to_local(p, m));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_bounds, bench_inverse);
criterion_main!(benches);
