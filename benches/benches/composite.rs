// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use strata_composite::{Compositor, render_full};
use strata_layers::{LayerStack, StackTemplate};
use strata_raster::{Stroke, StrokeState};
use strata_view::{IntPoint, IntSize, Viewport};

const MASK: IntSize = IntSize::new(640, 360);
const CANVAS: IntSize = IntSize::new(640, 360);

fn painted_stack(layers: usize) -> LayerStack {
    let mut stack = StackTemplate::default().with_mask_size(MASK).build().unwrap();
    while stack.len() < layers {
        stack.insert(stack.len()).unwrap();
    }
    let mut stroke = StrokeState::default();
    for i in 0..stack.len() {
        stack.set_active(i).unwrap();
        let y = 30 + 40 * i as i32;
        stroke.begin(Stroke::paint(25));
        stroke.sample(stack.active_mask_mut(), IntPoint::new(40, y));
        stroke.sample(stack.active_mask_mut(), IntPoint::new(600, y + 60));
        stroke.end();
    }
    stack.set_active(stack.len() / 2).unwrap();
    stack
}

fn bench_crop(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite/crop");

    for layers in [3, 8] {
        let stack = painted_stack(layers);
        for zoom in [1, 4] {
            let mut view = Viewport::new();
            view.load(MASK, CANVAS);
            view.set_zoom(zoom);

            group.bench_function(format!("cached_{layers}layers_z{zoom}"), |b| {
                let mut compositor = Compositor::new();
                compositor.render_crop(&stack, &view, false);
                b.iter(|| black_box(compositor.render_crop(&stack, &view, false).data().len()));
            });

            group.bench_function(format!("cold_{layers}layers_z{zoom}"), |b| {
                b.iter_batched(
                    Compositor::new,
                    |mut compositor| {
                        black_box(compositor.render_crop(&stack, &view, false).data().len())
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite/full");
    for layers in [3, 8] {
        let stack = painted_stack(layers);
        group.bench_function(format!("export_{layers}layers"), |b| {
            b.iter(|| black_box(render_full(&stack, true)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_crop, bench_full);
criterion_main!(benches);
