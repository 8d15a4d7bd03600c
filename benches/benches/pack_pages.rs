// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use matboard_layout::pack::{PackOptions, PackableItem, pack};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Photo-like groups: a mix of bordered portrait and landscape sizes with some jitter.
fn gen_groups(count: usize) -> Vec<PackableItem<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let jitter = rng.next_f64() * 40.0;
            let size = if rng.next_f64() < 0.5 {
                Size::new(416.0 + jitter, 616.0)
            } else {
                Size::new(616.0, 416.0 + jitter)
            };
            PackableItem { id: i as u32, size }
        })
        .collect()
}

fn gen_uniform(count: usize, cell: f64) -> Vec<PackableItem<u32>> {
    (0..count)
        .map(|i| PackableItem {
            id: i as u32,
            size: Size::new(cell, cell),
        })
        .collect()
}

fn a4_options() -> PackOptions {
    PackOptions {
        page_size: Size::new(1240.0, 1754.0),
        margin: 40.0,
        cell_gap: 20.0,
        page_gap: 100.0,
        page_offset: Vec2::new(200.0, 0.0),
        anchor: Point::ORIGIN,
    }
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let options = a4_options();
    for &n in &[50usize, 500, 5000] {
        let items = gen_groups(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("photos_n{}", n), |b| {
            b.iter(|| {
                let packing = pack(black_box(&items), &options);
                black_box(packing.pages.len());
            })
        });
    }
    let items = gen_uniform(10_000, 24.0);
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("thumbnails_n10000", |b| {
        b.iter(|| {
            let packing = pack(black_box(&items), &options);
            black_box(packing.items.len());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
