use crate::util::generate_cars;
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use tabular_processor::processors::csv::reader::detect;
use tabular_processor::schema::CSV_DELIMITERS;

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader::detect");
    for (name, num_elements) in SCENARIOS {
        // `|` is tried last, after two failed attempts.
        for delimiter in [';', '|'] {
            let buffer = generate_cars(num_elements, delimiter);
            group.throughput(criterion::Throughput::Elements(num_elements));
            group.bench_with_input(
                BenchmarkId::new(name, delimiter), &buffer,
                |b, buffer| b.iter(|| {
                    detect(black_box(buffer.as_bytes()), &CSV_DELIMITERS)
                        .expect("Benchmark: unable to detect delimiter")
                }),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_detection);
