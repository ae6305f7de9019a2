use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathround::{parse, DEFAULT_PATH};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("pathround");

    g.bench_function(BenchmarkId::new("parse", "default"), |b| {
        b.iter(|| {
            black_box(parse(black_box(DEFAULT_PATH)).unwrap());
        })
    });

    g.bench_function(BenchmarkId::new("format", "default"), |b| {
        let path = parse(DEFAULT_PATH).unwrap().rounded();

        b.iter(|| {
            black_box(path.to_string());
        })
    });

    let long = format!("M0 0{}Z", "C1.5 2.5 3.5 4.5 5.5 6.5L7 8H9V10".repeat(1000));
    g.bench_function(BenchmarkId::new("parse", "long"), |b| {
        b.iter(|| {
            black_box(parse(black_box(&long)).unwrap());
        })
    });

    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
