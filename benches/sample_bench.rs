//! Benchmarks for chunkplot.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chunkplot::{ChunkerConfig, input, sampler};

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let config = ChunkerConfig::default();

    for size in [1024 * 1024, 10 * 1024 * 1024] {
        let data = input::seeded_bytes(size, 0);

        group.throughput(Throughput::Bytes(size as u64));
        for algorithm in ["fastcdc", "ultracdc"] {
            group.bench_with_input(
                format!("{}_{}mb", algorithm, size / (1024 * 1024)),
                &data,
                |b, data| {
                    b.iter(|| {
                        let lengths =
                            sampler::sample(black_box(data.clone()), algorithm, &config).unwrap();
                        black_box(lengths.len())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let report: String = (0..1000)
        .map(|i| {
            format!(
                "Benchmark_Algo{}-14  1000  {} ns/op  {}.5 MB/s  {} chunks\n",
                i,
                100 + i,
                200 + i,
                50 + i
            )
        })
        .collect();

    group.throughput(Throughput::Bytes(report.len() as u64));
    group.bench_function("report_1000_lines", |b| {
        b.iter(|| {
            let records = chunkplot::bench::read_records(black_box(report.as_bytes())).unwrap();
            black_box(records.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_parsing);
criterion_main!(benches);
