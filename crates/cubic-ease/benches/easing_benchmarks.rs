//! Benchmark tests for easing evaluation.
//!
//! Run with: cargo bench --bench easing_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use cubic_ease::{BezierParams, BezierSolver, CubicEase, EasingFunction, cubic_ease};

fn inputs() -> Vec<f64> {
    (0..=1000).map(|i| f64::from(i) / 1000.0).collect()
}

fn bench_identity_evaluate(c: &mut Criterion) {
    let easing = EasingFunction::from(BezierParams::LINEAR);
    let inputs = inputs();

    c.bench_function("identity_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(easing.evaluate(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_preset_evaluate(c: &mut Criterion) {
    let inputs = inputs();

    for (name, params) in BezierParams::KEYWORDS {
        let easing = EasingFunction::from(params);
        easing.precompute();
        c.bench_function(&format!("evaluate_{name}"), |b| {
            b.iter(|| {
                for &input in &inputs {
                    std::hint::black_box(easing.evaluate(std::hint::black_box(input)));
                }
            });
        });
    }
}

fn bench_bisection_path(c: &mut Criterion) {
    // x(t) = t^3 is flat near zero, forcing the bisection fallback.
    let solver = BezierSolver::new(0.0, 0.0);
    let inputs: Vec<f64> = (1..=1000).map(|i| f64::from(i) * 1e-8).collect();

    c.bench_function("solver_bisection", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(solver.t_for_x(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("sample_table_build", |b| {
        b.iter(|| std::hint::black_box(BezierSolver::new(0.42, 0.58)));
    });
}

fn bench_one_shot_vs_reused(c: &mut Criterion) {
    let bezier = BezierParams::EASE.to_array();
    let reused = CubicEase::new(0.0, 1000.0, 0.0, 1.0, EasingFunction::from(BezierParams::EASE));

    let mut group = c.benchmark_group("cubic_ease");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("one_shot", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let value = f64::from(i);
                std::hint::black_box(cubic_ease(value, 0.0, 1000.0, 0.0, 1.0, bezier).ok());
            }
        });
    });

    if let Ok(reused) = reused {
        group.bench_function("reused", |b| {
            b.iter(|| {
                for i in 0..1000 {
                    std::hint::black_box(reused.apply(std::hint::black_box(f64::from(i))));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_identity_evaluate,
    bench_preset_evaluate,
    bench_bisection_path,
    bench_table_build,
    bench_one_shot_vs_reused,
);

criterion_main!(benches);
