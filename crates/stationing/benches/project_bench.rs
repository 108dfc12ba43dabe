//! Criterion benchmarks for point projection and batch runs.
//! Focus sizes: alignment vertices in {10, 100, 1000}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use stationing::batch::Never;
use stationing::{project, run, Alignment, Polyline, StationCfg, SurveyPoint, Vertex};

/// Meandering centerline heading roughly east.
fn random_alignment(n: usize, seed: u64) -> Polyline {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut vs = Vec::with_capacity(n);
    for _ in 0..n {
        vs.push(Vertex::new(x, y));
        x += rng.gen_range(5.0..25.0);
        y += rng.gen_range(-10.0..10.0);
    }
    Polyline::new(vs)
}

fn random_points(m: usize, extent: f64, seed: u64) -> Vec<SurveyPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|i| {
            let p = Vertex::new(rng.gen_range(0.0..extent), rng.gen_range(-50.0..50.0));
            SurveyPoint::new(i as i64, p, rng.gen_range(90.0..110.0f64), "SHOT")
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    for &n in &[10usize, 100, 1000] {
        let pl = random_alignment(n, 41);
        let extent = pl.vertices()[n - 1].x;
        group.bench_with_input(BenchmarkId::new("single_point", n), &n, |b, _| {
            b.iter_batched(
                || random_points(1, extent, 42)[0].coord,
                |p| {
                    let _r = project(pl.vertices(), p, 99_999.0).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    for &n in &[10usize, 100, 1000] {
        let pl = random_alignment(n, 43);
        let extent = pl.vertices()[n - 1].x;
        let alignments = vec![Alignment::new("CL", pl)];
        let points = random_points(500, extent, 44);
        group.bench_with_input(BenchmarkId::new("500_points", n), &n, |b, _| {
            b.iter(|| run(&alignments, &points, StationCfg::default(), &Never))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_project, bench_run);
criterion_main!(benches);
