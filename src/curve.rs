use crate::float_trait::Float;
use crate::types::ArrayRef1;

use ndarray::Array1;
use num_complex::Complex;

/// Error produced by a curve provider, opaque to this crate
pub type CurveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A periodic complex-valued function of real time
///
/// This is the interface the curve-parsing collaborator implements: a mapping
/// from time values inside the declared domain $[T_0, T_1]$ to points of the
/// plane, treated as complex numbers. The function is implicitly periodic with
/// period $P = T_1 - T_0$.
///
/// Evaluation is batched: one call receives the whole abscissa array of a
/// quadrature pass, so a provider backed by a slow lookup (an SVG path walk,
/// an interpolation table) pays its per-call overhead once per integral
/// rather than once per node. A scalar [PeriodicFunction::eval] is provided
/// on top of the batch as a length-one batch, so both modes share one code
/// path and one rounding behavior.
///
/// Any `Fn(T) -> Complex<T>` closure is a [PeriodicFunction]; implement the
/// trait directly when evaluation is fallible or natively batched.
pub trait PeriodicFunction<T>: Send + Sync
where
    T: Float,
{
    /// Evaluate the function at every time value of the batch
    ///
    /// Returns one complex value per input, in input order.
    fn eval_batch(&self, t: &ArrayRef1<T>) -> Result<Array1<Complex<T>>, CurveError>;

    /// Evaluate the function at a single time value
    fn eval(&self, t: T) -> Result<Complex<T>, CurveError> {
        let batch = self.eval_batch(&ndarray::arr1(&[t]))?;
        Ok(batch[0])
    }
}

impl<T, F> PeriodicFunction<T> for F
where
    T: Float,
    F: Fn(T) -> Complex<T> + Send + Sync,
{
    fn eval_batch(&self, t: &ArrayRef1<T>) -> Result<Array1<Complex<T>>, CurveError> {
        Ok(t.iter().map(|&x| self(x)).collect())
    }
}
