use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use teletraf_traffic_core::{channels_for_blocking, erlang_b, erlang_c, grade_of_service};

/// Benchmarks the blocking recurrence across trunk group sizes
fn bench_erlang_b(c: &mut Criterion) {
    let mut group = c.benchmark_group("erlang_b");

    for &channels in &[30u32, 500, 5000] {
        let load = channels as f64 * 0.9;
        group.bench_with_input(BenchmarkId::from_parameter(channels), &channels, |b, &n| {
            b.iter(|| erlang_b(black_box(load), black_box(n)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks the delay probability at a typical contact-center size
fn bench_erlang_c(c: &mut Criterion) {
    c.bench_function("erlang_c_100_120", |b| {
        b.iter(|| erlang_c(black_box(100.0), black_box(120)).unwrap());
    });
}

/// Benchmarks the incremental trunk search
fn bench_dimensioning(c: &mut Criterion) {
    c.bench_function("channels_for_blocking_100_1pct", |b| {
        b.iter(|| channels_for_blocking(black_box(100.0), black_box(0.01)).unwrap());
    });
}

/// Benchmarks the one-call aggregate report
fn bench_grade_of_service(c: &mut Criterion) {
    c.bench_function("grade_of_service_10_15", |b| {
        b.iter(|| {
            grade_of_service(
                black_box(10.0),
                black_box(15),
                black_box(180.0),
                black_box(0.5),
            )
            .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_erlang_b,
    bench_erlang_c,
    bench_dimensioning,
    bench_grade_of_service
);
criterion_main!(benches);
