use criterion::{Criterion, criterion_group, criterion_main};
use freq_count::app;
use freq_count::config::Config;
use freq_count_domain::{InputSequence, ValueRange, tally};
use std::hint::black_box;

fn benchmark_tally(c: &mut Criterion) {
    let sequence = InputSequence::builtin();
    c.bench_function("tally_builtin", |b| {
        b.iter(|| {
            let table = tally(black_box(&sequence), Some(ValueRange::DIGITS)).unwrap();
            black_box(table);
        })
    });
}

fn benchmark_report(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("report_builtin_tsv", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64);
            let output = app::run_to(black_box(&config), &mut buf).unwrap();
            black_box((output, buf));
        })
    });
}

criterion_group!(benches, benchmark_tally, benchmark_report);
criterion_main!(benches);
