use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use robust_confidence::{MeanAndConf95, MedianAndMinMax};
use robust_plotpoints::{FloatRange, LinearInterpolation, PointGenerator, SpacedErrorPoints, StepFunction};

/// Keyed samples: `n_keys` x positions with `n_obs` noisy observations each
fn generate_samples(n_keys: usize, n_obs: usize, seed: u64) -> Vec<(f64, Vec<f64>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n_keys)
        .map(|i| {
            let x = i as f64;
            let obs = (0..n_obs).map(|_| x.sqrt() + rng.gen::<f64>()).collect();
            (x, obs)
        })
        .collect()
}

fn bench_spaced_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("SpacedSeries");
    let samples = generate_samples(200, 50, 42);
    let step = StepFunction::new(samples).unwrap();
    let data = FloatRange::new(0.0, 199.0).unwrap();

    for &points in &[100usize, 1000, 5000] {
        let spaced = SpacedErrorPoints::new(MeanAndConf95)
            .with_points(points)
            .with_error_bars(20);

        group.bench_with_input(BenchmarkId::new("step_mean_conf95", points), &points, |b, _| {
            b.iter(|| spaced.generate_series(0, 1, black_box(data), &step, data))
        });
    }
    group.finish();
}

fn bench_multi_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("MultiSeries");
    let data = FloatRange::new(0.0, 99.0).unwrap();

    for &n_series in &[2usize, 8, 32] {
        let generators: Vec<_> = (0..n_series)
            .map(|i| {
                let lerp = LinearInterpolation::new(generate_samples(100, 30, i as u64)).unwrap();
                PointGenerator::new(lerp, FloatRange::new(0.0, 98.5).unwrap())
            })
            .collect();
        let spaced = SpacedErrorPoints::new(MedianAndMinMax)
            .with_points(500)
            .with_error_bars(10);

        group.bench_with_input(
            BenchmarkId::new("sequential", n_series),
            &generators,
            |b, gens| b.iter(|| spaced.generate(black_box(data), gens)),
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", n_series),
            &generators,
            |b, gens| b.iter(|| spaced.generate_par(black_box(data), gens)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_spaced_series, bench_multi_series);
criterion_main!(benches);
