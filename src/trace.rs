//! Rotating-vector traces for the epicycle animation

use crate::float_trait::Float;
use crate::series::{FourierSeries, rotor};
use crate::types::ArrayRef1;

use itertools::izip;
use ndarray::{Array1, Array2};
use num_complex::Complex;
use num_traits::Zero;
use rayon::prelude::*;

/// Builds rotating-vector traces from a Fourier series, one per time sample
///
/// The trace for time $t$ is the sequence of cumulative partial sums
/// $$
/// \ell_0 = 0, \qquad
/// \ell_i = \ell_{i-1} + c_{\sigma(i-1)} \exp(2\pi i k_{\sigma(i-1)} t / P),
/// $$
/// where $\sigma$ orders the coefficients by strictly descending magnitude,
/// so the animation draws the longest vector first. Equal magnitudes keep
/// their original ascending-index order (stable sort); the rule is fixed
/// because it decides which vector is drawn "biggest" at a visual tie.
///
/// The draw order is computed once per builder and shared, read-only, by
/// every trace build. Each trace step adds a single rotor term to a running
/// total instead of recomputing the partial sum from scratch, and the last
/// element of a trace equals [FourierSeries::evaluate] at the same time up
/// to floating-point rounding.
#[derive(Clone, Debug)]
pub struct TraceBuilder<T>
where
    T: Float,
{
    indices: Array1<i64>,
    coefficients: Array1<Complex<T>>,
    period: T,
}

impl<T> TraceBuilder<T>
where
    T: Float,
{
    pub fn new(series: &FourierSeries<T>) -> Self {
        let coefficients = series.coefficients();
        let mut order: Vec<usize> = (0..series.len()).collect();
        // coefficients are finite by construction, so the comparison is total
        order.sort_by(|&i, &j| {
            coefficients[j]
                .norm()
                .partial_cmp(&coefficients[i].norm())
                .unwrap()
        });
        Self {
            indices: order.iter().map(|&i| series.indices()[i]).collect(),
            coefficients: order.iter().map(|&i| coefficients[i]).collect(),
            period: series.period(),
        }
    }

    /// Fourier indices in draw order, largest coefficient magnitude first
    pub fn indices(&self) -> &Array1<i64> {
        &self.indices
    }

    /// Coefficients in draw order, positionally aligned with
    /// [TraceBuilder::indices]
    pub fn coefficients(&self) -> &Array1<Complex<T>> {
        &self.coefficients
    }

    pub fn period(&self) -> T {
        self.period
    }

    /// Number of rotating vectors; traces are one element longer
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Cumulative partial sums for a single time value, starting at zero
    pub fn trace(&self, t: T) -> Array1<Complex<T>> {
        let mut line = Array1::zeros(self.len() + 1);
        self.fill_trace(t, line.as_slice_mut().unwrap());
        line
    }

    /// Traces for a batch of time values, one row per value
    ///
    /// Rows are mutually independent and are built in parallel on the rayon
    /// thread pool, all workers reading the shared draw order.
    pub fn traces(&self, t: &ArrayRef1<T>) -> Array2<Complex<T>> {
        let columns = self.len() + 1;
        let times: Vec<T> = t.iter().copied().collect();
        let mut flat = vec![Complex::zero(); times.len() * columns];
        flat.par_chunks_mut(columns)
            .zip(times.par_iter())
            .for_each(|(row, &time)| self.fill_trace(time, row));
        Array2::from_shape_vec((times.len(), columns), flat)
            .expect("row-major buffer matches the requested shape")
    }

    fn fill_trace(&self, t: T, line: &mut [Complex<T>]) {
        let mut total = Complex::zero();
        line[0] = total;
        for (&k, &c, slot) in izip!(&self.indices, &self.coefficients, &mut line[1..]) {
            total = total + c * rotor(k, t, self.period);
            *slot = total;
        }
    }
}
