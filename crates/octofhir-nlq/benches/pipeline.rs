//! Translation benchmarks using divan

use octofhir_nlq::QueryTranslator;
use std::sync::LazyLock;

static TRANSLATOR: LazyLock<QueryTranslator> = LazyLock::new(QueryTranslator::new);

const QUERIES: &[&str] = &[
    "Show me all diabetic patients over 50",
    "Find blood pressure observations for patient 123 from last 30 days",
    "List all female patients named Sarah with heart disease",
    "Get appointments for patient 9 today that are scheduled",
    "hello there",
];

fn main() {
    divan::main();
}

#[divan::bench(args = QUERIES)]
fn analyze(bencher: divan::Bencher, query: &str) {
    bencher.bench_local(|| TRANSLATOR.analyze(divan::black_box(query)));
}

#[divan::bench(args = QUERIES)]
fn translate(bencher: divan::Bencher, query: &str) {
    bencher.bench_local(|| TRANSLATOR.translate(divan::black_box(query)));
}

#[divan::bench]
fn process_report(bencher: divan::Bencher) {
    bencher.bench_local(|| TRANSLATOR.process(divan::black_box(QUERIES[0])));
}
