// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use strata_layers::StackTemplate;
use strata_session::{PointerButton, Session, SessionConfig};
use strata_view::IntSize;

fn loaded_session() -> Session {
    let size = IntSize::new(640, 360);
    let mut session = Session::new(SessionConfig::default().with_canvas_size(size));
    session.load(StackTemplate::default().with_mask_size(size).build().unwrap());
    session
}

fn bench_paint_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/gesture");

    // Each sample re-renders the canvas, as an embedder's subscriber would.
    group.bench_function("paint_50_samples", |b| {
        b.iter_batched(
            loaded_session,
            |mut session| {
                session
                    .pointer_down(PointerButton::Primary, Point::new(50.0, 100.0))
                    .unwrap();
                for i in 1..50 {
                    let x = 50.0 + f64::from(i) * 10.0;
                    black_box(session.pointer_move(Point::new(x, 100.0)).unwrap());
                }
                session.pointer_up(PointerButton::Primary).unwrap()
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("undo_redo", |b| {
        let mut session = loaded_session();
        session
            .pointer_down(PointerButton::Primary, Point::new(50.0, 100.0))
            .unwrap();
        session.pointer_up(PointerButton::Primary).unwrap();
        b.iter(|| {
            black_box(session.undo().unwrap());
            black_box(session.redo().unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_paint_gesture);
criterion_main!(benches);
