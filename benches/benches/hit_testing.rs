// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_interaction::{Registry, SharedPoint};
use kurbo::Point;

fn grid_points(n: usize, cell: f64) -> Vec<SharedPoint> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(SharedPoint::new(Point::new(
                x as f64 * cell + cell / 2.0,
                y as f64 * cell + cell / 2.0,
            )));
        }
    }
    out
}

fn registry_with_draggables(points: &[SharedPoint], radius: f64) -> Registry {
    let mut registry = Registry::new();
    for p in points {
        registry.register_draggable(p, radius, None);
    }
    registry
}

fn registry_with_clickables(n: usize, cell: f64) -> Registry {
    let mut registry = Registry::new();
    for y in 0..n {
        for x in 0..n {
            let p0 = Point::new(x as f64 * cell, y as f64 * cell);
            let p1 = Point::new(p0.x + cell * 1.5, p0.y + cell * 1.5);
            registry.register_clickable(p0, p1, || {});
        }
    }
    registry
}

fn bench_hit_draggable(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_draggable");
    for &n in &[10_usize, 32, 100] {
        let points = grid_points(n, 10.0);
        let registry = registry_with_draggables(&points, 8.0);
        let probes: Vec<Point> = points.iter().step_by(7).map(SharedPoint::get).collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(BenchmarkId::new("grid", n * n), |b| {
            b.iter(|| {
                for p in &probes {
                    black_box(registry.hit_draggable(black_box(*p)));
                }
            });
        });
    }
    group.finish();
}

fn bench_register_duplicates(c: &mut Criterion) {
    let points = grid_points(32, 10.0);
    let mut registry = registry_with_draggables(&points, 8.0);
    c.bench_function("register_draggable/duplicate_1024", |b| {
        b.iter(|| {
            for p in &points {
                black_box(registry.register_draggable(p, 8.0, None));
            }
        });
    });
}

fn bench_clickables_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("clickables_at");
    for &n in &[10_usize, 32, 100] {
        let registry = registry_with_clickables(n, 10.0);
        group.bench_function(BenchmarkId::new("overlap_grid", n * n), |b| {
            b.iter(|| black_box(registry.clickables_at(black_box(Point::new(55.0, 55.0)))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hit_draggable,
    bench_register_duplicates,
    bench_clickables_at,
);
criterion_main!(benches);
