use criterion::{criterion_group, criterion_main};

mod extraction;

criterion_group!(
    benches,
    extraction::bench_extraction,
    trace::bench_traces
);
criterion_main!(benches);
