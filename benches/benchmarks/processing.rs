use crate::util::{cars_file, generate_cars};
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BatchSize, BenchmarkId, Criterion};
use polars::prelude::{col, lit};
use tabular_processor::processor::Processor;
use tabular_processor::processors::csv::reader::detect;
use tabular_processor::processors::csv::CsvProcessor;
use tabular_processor::schema::{CSV_DELIMITERS, PRICE_COLUMN};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dataset::sorted_by");
    for (name, num_elements) in SCENARIOS {
        let dataset = detect(generate_cars(num_elements, ',').as_bytes(), &CSV_DELIMITERS)
            .expect("Benchmark setup: unable to parse data")
            .dataset;
        group.throughput(criterion::Throughput::Elements(num_elements));
        group.bench_with_input(BenchmarkId::from_parameter(name), &dataset, |b, dataset| {
            b.iter(|| dataset.sorted_by(black_box(PRICE_COLUMN), true))
        });
    }
    group.finish();
}

fn bench_group_means(c: &mut Criterion) {
    let mut group = c.benchmark_group("Processor::compute_group_means");
    for (name, num_elements) in SCENARIOS {
        let file = cars_file(num_elements, ';');
        let mut processor = CsvProcessor::new(file.path(), Vec::new());
        assert!(processor.read(), "Benchmark setup: unable to read data");
        processor.run().expect("Benchmark setup: processing failed");
        let result = processor.result().expect("Benchmark setup: no result").clone();
        group.throughput(criterion::Throughput::Elements(num_elements));
        group.bench_with_input(BenchmarkId::from_parameter(name), &result, |b, result| {
            b.iter(|| processor.compute_group_means(result, black_box(col("price_category").eq(lit(2u32)))))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("CsvProcessor::run");
    for (name, num_elements) in SCENARIOS {
        let file = cars_file(num_elements, ';');
        group.throughput(criterion::Throughput::Elements(num_elements));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter_batched(
                || {
                    let mut processor = CsvProcessor::new(file.path(), Vec::new());
                    assert!(processor.read(), "Benchmark setup: unable to read data");
                    processor
                },
                |mut processor| processor.run().expect("Benchmark: processing failed"),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_group_means, bench_pipeline);
