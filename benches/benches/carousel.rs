// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use builder_carousel::{Autoplay, Carousel, circular_distance};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_carousel");

    for len in [5_usize, 64, 1024] {
        group.bench_function(BenchmarkId::new("circular_distance", len), |b| {
            b.iter(|| {
                let mut sum = 0_isize;
                for index in 0..len {
                    sum += circular_distance(black_box(index), len / 3, len);
                }
                black_box(sum)
            })
        });

        group.bench_function(BenchmarkId::new("visible_slots", len), |b| {
            let carousel = Carousel::new(len, len / 2);
            b.iter(|| black_box(carousel.slots().filter(|slot| slot.is_visible()).count()))
        });
    }

    group.bench_function("autoplay_tick", |b| {
        let mut carousel = Carousel::new(8, 0).with_autoplay(Autoplay::new(4_000));
        let mut now = 0_u64;
        b.iter(|| {
            now += 1_000;
            black_box(carousel.tick(black_box(now)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_carousel);
criterion_main!(benches);
