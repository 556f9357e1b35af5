//! Composite fixed-order quadrature of complex-valued integrands

use crate::error::EvalError;
use crate::float_trait::Float;
use crate::types::ArrayRef1;

use conv::prelude::*;
use ndarray::Array1;
use num_complex::Complex;
use num_traits::Zero;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod gauss;
pub use gauss::GaussLegendreRule;

/// Integration-quality parameters of the composite rule
///
/// The interval is split into `n_sub` equal-width subintervals, each
/// integrated with the `order`-point Gauss–Legendre rule. These two knobs are
/// the only quality control: there is no error estimation or adaptive
/// refinement, so results are reproducible for a given pair. The defaults,
/// 200 subintervals of order 6, resolve drawing-path curves well past the
/// truncation orders worth animating.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct QuadratureSettings {
    pub n_sub: usize,
    pub order: usize,
}

impl QuadratureSettings {
    pub fn new(n_sub: usize, order: usize) -> Self {
        Self { n_sub, order }
    }
}

impl Default for QuadratureSettings {
    fn default() -> Self {
        Self {
            n_sub: 200,
            order: 6,
        }
    }
}

/// Composite Gauss–Legendre integrator for complex-valued integrands
///
/// For an interval $[a, b]$ split into $n$ subintervals of half-width
/// $h = (b - a) / 2n$, every reference node $\xi_j$ is mapped to
/// $t_j = c + h \xi_j$ around each subinterval midpoint $c$ and the integral
/// is accumulated as $\sum h w_j f(t_j)$. The integrand receives the whole
/// mapped abscissa array in a single batched call: a full coefficient
/// extraction evaluates the curve at $(2N + 1) \cdot n \cdot m$ points, and
/// each evaluation may itself be a costly lookup.
#[derive(Clone, Debug)]
pub struct Quadrature<T> {
    rule: GaussLegendreRule<T>,
    n_sub: usize,
}

impl<T> Quadrature<T>
where
    T: Float,
{
    pub fn new(settings: QuadratureSettings) -> Result<Self, EvalError> {
        if settings.n_sub < 1 {
            return Err(EvalError::invalid_parameter(
                "n_sub",
                "subinterval count must be at least unity",
            ));
        }
        let rule = GaussLegendreRule::new(settings.order)?;
        Ok(Self {
            rule,
            n_sub: settings.n_sub,
        })
    }

    pub fn rule(&self) -> &GaussLegendreRule<T> {
        &self.rule
    }

    pub fn n_sub(&self) -> usize {
        self.n_sub
    }

    /// Abscissas of the composite rule mapped onto `[a, b]`
    ///
    /// Laid out subinterval by subinterval, `n_sub * order` values in
    /// ascending order for `a < b`.
    pub fn abscissas(&self, a: T, b: T) -> Array1<T> {
        let half_width = self.half_width(a, b);
        let order = self.rule.order();
        Array1::from_shape_fn(self.n_sub * order, |idx| {
            let sub = idx / order;
            let node = idx % order;
            let center = a + half_width * (T::two() * sub.value_as::<T>().unwrap() + T::one());
            center + half_width * self.rule.nodes()[node]
        })
    }

    fn half_width(&self, a: T, b: T) -> T {
        (b - a) / (T::two() * self.n_sub.value_as::<T>().unwrap())
    }

    /// Approximate $\int_a^b f(t)\, dt$
    ///
    /// The integrand is called once with the whole mapped abscissa array and
    /// must return one value per abscissa. A degenerate interval `a == b`
    /// integrates to zero without evaluating the integrand. Integrand
    /// failures propagate unchanged; non-finite integrand values fail with
    /// [EvalError::NonFiniteIntegrand] naming the offending time value.
    pub fn integrate<F>(&self, integrand: F, a: T, b: T) -> Result<Complex<T>, EvalError>
    where
        F: Fn(&ArrayRef1<T>) -> Result<Array1<Complex<T>>, EvalError>,
    {
        if a == b {
            return Ok(Complex::zero());
        }
        let abscissas = self.abscissas(a, b);
        let values = integrand(&abscissas)?;
        debug_assert_eq!(values.len(), abscissas.len());
        let half_width = self.half_width(a, b);
        let mut total = Complex::<T>::zero();
        for ((&value, &t), &weight) in values
            .iter()
            .zip(abscissas.iter())
            .zip(self.rule.weights().iter().cycle())
        {
            if !(value.re.is_finite() && value.im.is_finite()) {
                return Err(EvalError::NonFiniteIntegrand {
                    t: t.to_f64().unwrap_or(f64::NAN),
                });
            }
            total = total + value * (half_width * weight);
        }
        if !(total.re.is_finite() && total.im.is_finite()) {
            return Err(EvalError::NonFiniteIntegral {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn real_integrand(
        f: impl Fn(f64) -> f64,
    ) -> impl Fn(&ArrayRef1<f64>) -> Result<Array1<Complex<f64>>, EvalError> {
        move |t| Ok(t.iter().map(|&x| Complex::new(f(x), 0.0)).collect())
    }

    #[test]
    fn settings_serialization_round_trip() {
        let settings = QuadratureSettings::new(50, 4);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"n_sub":50,"order":4}"#);
        assert_eq!(
            serde_json::from_str::<QuadratureSettings>(&json).unwrap(),
            settings
        );
    }

    #[test]
    fn zero_subintervals_are_rejected() {
        assert!(matches!(
            Quadrature::<f64>::new(QuadratureSettings::new(0, 6)),
            Err(EvalError::InvalidParameter { param: "n_sub", .. })
        ));
    }

    #[test]
    fn zero_order_is_rejected() {
        assert!(matches!(
            Quadrature::<f64>::new(QuadratureSettings::new(200, 0)),
            Err(EvalError::InvalidParameter { param: "order", .. })
        ));
    }

    #[test]
    fn degenerate_interval_integrates_to_zero() {
        let quadrature = Quadrature::new(QuadratureSettings::default()).unwrap();
        let integrand = |_: &ArrayRef1<f64>| -> Result<Array1<Complex<f64>>, EvalError> {
            panic!("integrand must not be evaluated for a degenerate interval");
        };
        assert_eq!(
            quadrature.integrate(integrand, 0.3, 0.3).unwrap(),
            Complex::new(0.0, 0.0)
        );
    }

    #[test]
    fn abscissas_are_sorted_and_inside_the_interval() {
        let quadrature = Quadrature::<f64>::new(QuadratureSettings::new(7, 4)).unwrap();
        let abscissas = quadrature.abscissas(-1.5, 2.5);
        assert_eq!(abscissas.len(), 28);
        assert!(abscissas.as_slice().unwrap().is_sorted());
        assert!(abscissas.iter().all(|&t| (-1.5..2.5).contains(&t)));
    }

    /// Order m is exact for polynomials up to degree 2m - 1 on a single subinterval
    #[test]
    fn polynomial_exactness() {
        let quadrature = Quadrature::new(QuadratureSettings::new(1, 3)).unwrap();
        // 3 t^5 - t^2 + 1 over [0, 1]: 1/2 - 1/3 + 1
        let value = quadrature
            .integrate(real_integrand(|x| 3.0 * x.powi(5) - x.powi(2) + 1.0), 0.0, 1.0)
            .unwrap();
        assert_relative_eq!(value.re, 0.5 - 1.0 / 3.0 + 1.0, max_relative = 1e-14);
        assert_relative_eq!(value.im, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn unit_rotor_integrates_to_zero_over_one_period() {
        let quadrature = Quadrature::new(QuadratureSettings::default()).unwrap();
        let value = quadrature
            .integrate(
                |t: &ArrayRef1<f64>| Ok(t.iter().map(|&x| Complex::cis(2.0 * PI * x)).collect()),
                0.0,
                1.0,
            )
            .unwrap();
        assert_relative_eq!(value.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_interval_flips_the_sign() {
        let quadrature = Quadrature::new(QuadratureSettings::new(16, 4)).unwrap();
        let forward = quadrature
            .integrate(real_integrand(|x| x.exp()), 0.0, 1.0)
            .unwrap();
        let backward = quadrature
            .integrate(real_integrand(|x| x.exp()), 1.0, 0.0)
            .unwrap();
        assert_relative_eq!(forward.re, -backward.re, max_relative = 1e-12);
    }

    #[test]
    fn integrand_failure_propagates() {
        let quadrature = Quadrature::new(QuadratureSettings::default()).unwrap();
        let result = quadrature.integrate(
            |_: &ArrayRef1<f64>| {
                Err(EvalError::invalid_parameter("curve", "lookup table is empty"))
            },
            0.0,
            1.0,
        );
        assert!(matches!(
            result,
            Err(EvalError::InvalidParameter { param: "curve", .. })
        ));
    }

    #[test]
    fn non_finite_integrand_value_is_reported_with_its_abscissa() {
        let quadrature = Quadrature::new(QuadratureSettings::new(10, 2)).unwrap();
        let result = quadrature.integrate(
            |t: &ArrayRef1<f64>| {
                Ok(t.iter()
                    .map(|&x| {
                        if x > 0.5 {
                            Complex::new(f64::NAN, 0.0)
                        } else {
                            Complex::new(1.0, 0.0)
                        }
                    })
                    .collect())
            },
            0.0,
            1.0,
        );
        match result {
            Err(EvalError::NonFiniteIntegrand { t }) => assert!(t > 0.5),
            other => panic!("expected NonFiniteIntegrand, got {other:?}"),
        }
    }

    #[test]
    fn convergence_in_subinterval_count() {
        // exp is not a polynomial, so low subinterval counts leave an error to shrink
        let exact = f64::exp(1.0) - 1.0;
        let errors: Vec<_> = [1, 2, 4]
            .iter()
            .map(|&n_sub| {
                let quadrature = Quadrature::new(QuadratureSettings::new(n_sub, 2)).unwrap();
                let value = quadrature
                    .integrate(real_integrand(f64::exp), 0.0, 1.0)
                    .unwrap();
                (value.re - exact).abs()
            })
            .collect();
        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
    }
}
