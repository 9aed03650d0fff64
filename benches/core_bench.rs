use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use plan_sketch::core::snap::{self, SnapSettings};
use plan_sketch::{build_wall_model, closed_polygon, FloorPlan};
use std::hint::black_box;

/// Regelmäßiges n-Eck als geschlossener Ring.
fn build_ring(point_count: usize) -> FloorPlan {
    let mut plan = FloorPlan::new();
    let radius = 2_000.0;

    for index in 0..point_count {
        let angle = index as f64 / point_count as f64 * std::f64::consts::TAU;
        plan.add_point(DVec2::new(radius * angle.cos(), radius * angle.sin()));
    }
    for index in 0..point_count {
        plan.add_segment(index, (index + 1) % point_count, None);
    }

    plan
}

/// Raster aus Punkten ohne Segmente (Snap-Kandidaten).
fn build_point_grid(point_count: usize) -> FloorPlan {
    let mut plan = FloorPlan::new();
    let columns = (point_count as f64).sqrt().ceil() as usize;

    for index in 0..point_count {
        let x = (index % columns) as f64 * 40.0;
        let y = (index / columns) as f64 * 40.0;
        plan.add_point(DVec2::new(x, y));
    }

    plan
}

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 2000) as f64 + 0.37;
            let y = ((i * 7) % 2000) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");

    for &point_count in &[16usize, 256, 4096] {
        let plan = build_ring(point_count);
        group.bench_with_input(
            BenchmarkId::new("closed_polygon", point_count),
            &plan,
            |b, plan| b.iter(|| black_box(closed_polygon(black_box(&plan.segments)))),
        );
    }

    group.finish();
}

fn bench_walls(c: &mut Criterion) {
    let mut group = c.benchmark_group("walls");

    for &point_count in &[16usize, 256, 4096] {
        let plan = build_ring(point_count);
        group.bench_with_input(
            BenchmarkId::new("build_wall_model", point_count),
            &plan,
            |b, plan| {
                b.iter(|| {
                    let model = build_wall_model(black_box(plan), 200.0, 2.5, 0.05);
                    black_box(model.walls.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_snapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapping");
    let settings = SnapSettings {
        enabled: true,
        point_radius: 10.0,
        grid_step: 25.0,
    };
    let query_points = build_query_points(1024);

    for &point_count in &[100usize, 2_500] {
        let plan = build_point_grid(point_count);
        group.bench_with_input(
            BenchmarkId::new("resolve_batch", point_count),
            &plan,
            |b, plan| {
                b.iter(|| {
                    let mut snapped = 0usize;
                    for point in &query_points {
                        if snap::resolve(plan, black_box(*point), &settings)
                            .snapped_point
                            .is_some()
                        {
                            snapped += 1;
                        }
                    }
                    black_box(snapped)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_polygon, bench_walls, bench_snapping);
criterion_main!(core_benches);
