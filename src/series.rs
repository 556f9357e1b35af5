//! Truncated Fourier series storage and evaluation

use crate::error::EvalError;
use crate::float_trait::Float;
use crate::types::ArrayRef1;

use conv::prelude::*;
use macro_const::macro_const;
use ndarray::Array1;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

macro_const! {
    const ROTOR_SIGN_DOC: &'static str = r"
The rotor is $\exp(+2\pi i k t / P)$ with a *positive* exponent, for
coefficient extraction and for evaluation alike. Textbook Fourier analysis
conjugates the extraction rotor instead; here the sign is uniform and
positive, and the rotation direction of the reconstructed trace depends on
it: flipping it reverses every drawn vector. Keep the sign as is.
";
}

#[doc = ROTOR_SIGN_DOC!()]
#[inline]
pub(crate) fn rotor<T>(index: i64, t: T, period: T) -> Complex<T>
where
    T: Float,
{
    let frequency: T = index.value_as().unwrap();
    Complex::cis(T::two() * T::PI() * frequency * t / period)
}

/// Truncated complex Fourier series: index/coefficient pairing plus period
///
/// `indices` and `coefficients` are positionally aligned and equally long;
/// the period is positive and finite; every coefficient is finite. The
/// constructor enforces all three, so evaluation and trace building never
/// fail.
#[doc = ROTOR_SIGN_DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    try_from = "FourierSeriesParameters<T>",
    into = "FourierSeriesParameters<T>",
    bound = "T: Float"
)]
pub struct FourierSeries<T>
where
    T: Float,
{
    indices: Array1<i64>,
    coefficients: Array1<Complex<T>>,
    period: T,
}

impl<T> FourierSeries<T>
where
    T: Float,
{
    pub fn new(
        indices: impl Into<Array1<i64>>,
        coefficients: impl Into<Array1<Complex<T>>>,
        period: T,
    ) -> Result<Self, EvalError> {
        let indices = indices.into();
        let coefficients = coefficients.into();
        if indices.len() != coefficients.len() {
            return Err(EvalError::ShapeMismatch {
                indices: indices.len(),
                coefficients: coefficients.len(),
            });
        }
        if !(period.is_finite() && period > T::zero()) {
            return Err(EvalError::invalid_parameter(
                "period",
                format!("period must be positive and finite, got {period}"),
            ));
        }
        for (&k, &c) in indices.iter().zip(coefficients.iter()) {
            if !(c.re.is_finite() && c.im.is_finite()) {
                return Err(EvalError::NonFiniteCoefficient { index: k });
            }
        }
        Ok(Self {
            indices,
            coefficients,
            period,
        })
    }

    /// Fourier indices, positionally aligned with [FourierSeries::coefficients]
    pub fn indices(&self) -> &Array1<i64> {
        &self.indices
    }

    pub fn coefficients(&self) -> &Array1<Complex<T>> {
        &self.coefficients
    }

    pub fn period(&self) -> T {
        self.period
    }

    /// Number of index/coefficient pairs
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Reconstruct the series value at a single time
    ///
    /// $v(t) = \sum_k c_k \exp(2\pi i k t / P)$, a full summation with no
    /// state carried from other time values.
    pub fn evaluate(&self, t: T) -> Complex<T> {
        self.indices
            .iter()
            .zip(self.coefficients.iter())
            .map(|(&k, &c)| c * rotor(k, t, self.period))
            .sum()
    }

    /// Reconstruct the series at every time of the batch
    ///
    /// One output per input, each computed independently by the same kernel
    /// as [FourierSeries::evaluate].
    pub fn evaluate_batch(&self, t: &ArrayRef1<T>) -> Array1<Complex<T>> {
        t.iter().map(|&x| self.evaluate(x)).collect()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "FourierSeries", bound = "T: Float")]
struct FourierSeriesParameters<T>
where
    T: Float,
{
    indices: Vec<i64>,
    coefficients: Vec<Complex<T>>,
    period: T,
}

impl<T> TryFrom<FourierSeriesParameters<T>> for FourierSeries<T>
where
    T: Float,
{
    type Error = EvalError;

    fn try_from(p: FourierSeriesParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.indices, p.coefficients, p.period)
    }
}

impl<T> From<FourierSeries<T>> for FourierSeriesParameters<T>
where
    T: Float,
{
    fn from(series: FourierSeries<T>) -> Self {
        Self {
            indices: series.indices.to_vec(),
            coefficients: series.coefficients.to_vec(),
            period: series.period,
        }
    }
}
