use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trackgate::{
    Estimator, EstimatorConfig, Frame, HitSearch, LocalError, LocalPoint, MeasuredHit, PlanarHit,
    Point3, SurfaceFrame, SurfacePatch, TrajectoryPrediction, Vector3,
};

fn make_hits(frame: SurfaceFrame, count: usize) -> Vec<PlanarHit> {
    // Deterministic scatter over an 8 x 8 cm sensor.
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 800) as f32 / 100.0 - 4.0;
            let y = ((i * 91 + 13) % 800) as f32 / 100.0 - 4.0;
            PlanarHit::new(LocalPoint::new(x, y), frame)
        })
        .collect()
}

fn bench_estimator(c: &mut Criterion) {
    let est = Estimator::new(EstimatorConfig::default());
    let frame = SurfaceFrame::new(
        Point3::new(0.0, 25.0, 120.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    let surface = SurfacePatch::from_rectangle(frame, 4.0, 4.0).unwrap();
    let hits = make_hits(frame, 10_000);
    let pred = TrajectoryPrediction::new(frame.to_global(LocalPoint::new(0.2, -0.3)))
        .with_local_position(LocalPoint::new(0.2, -0.3))
        .with_local_error(LocalError::new(0.04, 0.04));
    let hit = hits[17].global_position();

    c.bench_function("estimate_single", |b| {
        b.iter(|| black_box(est.estimate(black_box(&pred), black_box(hit))));
    });

    c.bench_function("estimate_from_vertex_single", |b| {
        let vertex = Point3::new(0.05, -0.02, 1.5);
        b.iter(|| {
            black_box(est.estimate_from_vertex(vertex, black_box(&pred), black_box(hit)))
        });
    });

    c.bench_function("surface_compatible", |b| {
        b.iter(|| black_box(est.surface_compatible(black_box(&pred), black_box(&surface))));
    });

    let unbounded = TrajectoryPrediction {
        local_error: None,
        ..pred
    };
    c.bench_function("search_surface_10k_bounded", |b| {
        let search = HitSearch::new(&est, &pred);
        b.iter(|| black_box(search.run(&surface, &hits)));
    });
    c.bench_function("search_surface_10k_unbounded", |b| {
        let search = HitSearch::new(&est, &unbounded).with_frame(Frame::Surface);
        b.iter(|| black_box(search.run(&surface, &hits)));
    });

    if cfg!(feature = "rayon") {
        c.bench_function("search_surface_10k_unbounded_parallel", |b| {
            let search = HitSearch::new(&est, &unbounded).with_parallel(true);
            b.iter(|| black_box(search.run(&surface, &hits)));
        });
    }
}

criterion_group!(benches, bench_estimator);
criterion_main!(benches);
