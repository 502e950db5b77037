// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strata_layers::Mask;
use strata_raster::{Stroke, StrokeState, fill_capsule, fill_disc};
use strata_view::{IntPoint, IntSize};

const MASK: IntSize = IntSize::new(640, 360);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn point(&mut self) -> IntPoint {
        IntPoint::new(
            (self.next_u32() % MASK.width as u32) as i32,
            (self.next_u32() % MASK.height as u32) as i32,
        )
    }
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster/shapes");
    let mut mask = Mask::new(MASK);

    for radius in [2, 10, 40] {
        group.bench_function(format!("disc_r{radius}"), |b| {
            let mut rng = Lcg(7);
            b.iter(|| black_box(fill_disc(&mut mask, rng.point(), radius, 255)));
        });
        group.bench_function(format!("capsule_r{radius}"), |b| {
            let mut rng = Lcg(11);
            b.iter(|| {
                let from = rng.point();
                let to = IntPoint::new(from.x + 24, from.y + 9);
                black_box(fill_capsule(&mut mask, from, to, radius, 255))
            });
        });
    }

    group.finish();
}

fn bench_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster/stroke");

    // A pointer drag delivers samples a few pixels apart.
    let samples: Vec<IntPoint> = (0..200)
        .map(|i| IntPoint::new(20 + i * 3, 180 + (i % 17) - 8))
        .collect();

    group.bench_function("drag_200_samples_r10", |b| {
        let mut mask = Mask::new(MASK);
        let mut state = StrokeState::default();
        b.iter(|| {
            state.begin(Stroke::paint(10));
            for &pt in &samples {
                black_box(state.sample(&mut mask, pt));
            }
            state.end()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_stroke);
criterion_main!(benches);
