// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel::{Easel, Options, RecordingSurface, Surface};
use easel_gesture::{GestureTracker, InputEvent};
use easel_interaction::{Registry, SharedPoint};
use easel_view::{Viewport, ZOOM_FRAMES};
use kurbo::{Point, Size};
use peniko::Color;
use smallvec::smallvec;

fn pinch_events(steps: usize) -> Vec<InputEvent> {
    (0..steps)
        .map(|i| {
            let gap = 20.0 + i as f64;
            InputEvent::TouchMove {
                touches: smallvec![
                    Point::new(200.0 - gap, 200.0),
                    Point::new(200.0 + gap, 200.0)
                ],
            }
        })
        .collect()
}

fn pan_events(steps: usize) -> Vec<InputEvent> {
    let mut out = vec![InputEvent::PointerDown {
        position: Point::new(200.0, 200.0),
    }];
    out.extend((0..steps).map(|i| InputEvent::PointerMove {
        position: Point::new(200.0 - (i % 50) as f64, 200.0 - (i % 30) as f64),
    }));
    out.push(InputEvent::PointerUp {
        position: Point::new(150.0, 170.0),
    });
    out
}

fn bench_tracker(c: &mut Criterion) {
    let pinch = pinch_events(200);
    let pan = pan_events(200);
    let points: Vec<SharedPoint> = (0..256_i32)
        .map(|i| {
            SharedPoint::new(Point::new(
                f64::from(i % 16) * 25.0,
                f64::from(i / 16) * 25.0,
            ))
        })
        .collect();

    c.bench_function("tracker/pinch_200", |b| {
        b.iter_batched(
            || {
                (
                    Viewport::new(Size::new(400.0, 400.0)),
                    Registry::new(),
                    GestureTracker::new(),
                )
            },
            |(mut view, mut registry, mut tracker)| {
                for e in &pinch {
                    tracker.handle(e, &mut view, &mut registry);
                }
                black_box(view.scale())
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("tracker/pan_200_with_256_draggables", |b| {
        b.iter_batched(
            || {
                let mut view = Viewport::new(Size::new(400.0, 400.0));
                view.scale_at(Point::ZERO, 2.0);
                let mut registry = Registry::new();
                for p in &points {
                    registry.register_draggable(p, 4.0, None);
                }
                (view, registry, GestureTracker::new())
            },
            |(mut view, mut registry, mut tracker)| {
                for e in &pan {
                    tracker.handle(e, &mut view, &mut registry);
                }
                black_box(view.origin())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("easel/zoom_animation_ticks", |b| {
        b.iter_batched(
            || {
                let mut easel =
                    Easel::new(RecordingSurface::new(), Options::new(400.0, 400.0)).unwrap();
                for i in 0..64_i32 {
                    let p = SharedPoint::new(Point::new(f64::from(i) * 6.0, 100.0));
                    easel.register_draggable(&p, 5.0, None);
                }
                easel.create_layer(|cx| {
                    for i in 0..32_i32 {
                        cx.surface().fill_circle(
                            Point::new(f64::from(i) * 10.0, 50.0),
                            3.0,
                            Color::BLACK,
                        );
                    }
                });
                for t in [0, 100] {
                    easel.handle_input(&InputEvent::TouchStart {
                        touches: smallvec![Point::new(200.0, 200.0)],
                        time_ms: t,
                    });
                }
                easel
            },
            |mut easel| {
                for _ in 0..ZOOM_FRAMES {
                    easel.tick();
                    easel.surface_mut().clear_ops();
                }
                black_box(easel.viewport().scale())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tracker, bench_tick);
criterion_main!(benches);
