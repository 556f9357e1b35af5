//! Fourier-coefficient extraction

use crate::curve::PeriodicFunction;
use crate::error::EvalError;
use crate::float_trait::Float;
use crate::quadrature::{Quadrature, QuadratureSettings};
use crate::series::{FourierSeries, rotor};
use crate::types::ArrayRef1;

use num_complex::Complex;
use rayon::prelude::*;

/// Extracts truncated Fourier coefficient sets from periodic functions
///
/// For truncation order $N$ over the domain $[T_0, T_1]$, the extractor
/// computes the $2N + 1$ coefficients
/// $$
/// c_k = \int_{T_0}^{T_1} f(t) \exp(+2\pi i k t / P)\, dt,
/// \qquad k = -N \dots N,
/// $$
/// with $P = T_1 - T_0$, one composite quadrature pass per index; note the
/// positive exponent, shared with the evaluation rotor (see
/// [FourierSeries]). Quadrature quality is fixed per extractor and applies
/// uniformly to every index.
///
/// Coefficients are mutually independent, so the integrals run on the rayon
/// thread pool, each worker writing its own output slot. A single failing
/// index fails the whole extraction: partial coefficient sets are meaningless
/// for a reconstruction and are never returned.
#[derive(Clone, Debug)]
pub struct CoefficientExtractor<T> {
    quadrature: Quadrature<T>,
}

impl<T> CoefficientExtractor<T>
where
    T: Float,
{
    pub fn new(settings: QuadratureSettings) -> Result<Self, EvalError> {
        Ok(Self {
            quadrature: Quadrature::new(settings)?,
        })
    }

    pub fn quadrature(&self) -> &Quadrature<T> {
        &self.quadrature
    }

    /// Extract coefficients for indices $-N \dots N$
    ///
    /// The domain bounds must be finite with `domain.0 < domain.1`; their
    /// difference is the period of the returned series.
    pub fn extract<F>(
        &self,
        func: &F,
        domain: (T, T),
        n: usize,
    ) -> Result<FourierSeries<T>, EvalError>
    where
        F: PeriodicFunction<T>,
    {
        let (t0, t1) = domain;
        if !t0.is_finite() || !t1.is_finite() || t0 >= t1 {
            return Err(EvalError::invalid_parameter(
                "domain",
                format!("domain must satisfy T0 < T1 with finite bounds, got [{t0}, {t1}]"),
            ));
        }
        let period = t1 - t0;
        let n = n as i64;
        let indices: Vec<_> = (-n..=n).collect();
        let coefficients = indices
            .par_iter()
            .map(|&k| self.coefficient(func, k, t0, t1, period))
            .collect::<Result<Vec<_>, _>>()?;
        FourierSeries::new(indices, coefficients, period)
    }

    fn coefficient<F>(
        &self,
        func: &F,
        k: i64,
        t0: T,
        t1: T,
        period: T,
    ) -> Result<Complex<T>, EvalError>
    where
        F: PeriodicFunction<T>,
    {
        let integrand = |t: &ArrayRef1<T>| {
            let values = func
                .eval_batch(t)
                .map_err(|source| EvalError::UpstreamFailure { index: k, source })?;
            debug_assert_eq!(values.len(), t.len());
            Ok(values
                .iter()
                .zip(t.iter())
                .map(|(&value, &x)| value * rotor(k, x, period))
                .collect())
        };
        self.quadrature
            .integrate(integrand, t0, t1)
            .map_err(|error| match error {
                EvalError::NonFiniteIntegral { .. } => EvalError::NonFiniteCoefficient { index: k },
                other => other,
            })
    }
}
