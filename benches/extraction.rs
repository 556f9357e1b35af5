use criterion::Criterion;
use fourier_epicycle::prelude::*;
use fourier_epicycle_test_util::square_path;
use std::hint::black_box;

pub fn bench_extraction(c: &mut Criterion) {
    let extractor = CoefficientExtractor::new(QuadratureSettings::default()).unwrap();
    for n in [5_usize, 15, 30] {
        c.bench_function(format!("extract: square path, N = {n}").as_str(), |b| {
            b.iter(|| {
                extractor
                    .extract(&square_path, (0.0, 1.0), black_box(n))
                    .unwrap()
            })
        });
    }
}
