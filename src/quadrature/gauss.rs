//! Gauss–Legendre nodes and weights

use crate::error::EvalError;
use crate::float_trait::Float;

use conv::prelude::*;
use ndarray::Array1;

const MAX_NEWTON_ITERATIONS: usize = 100;

/// The $m$-point Gauss–Legendre rule on the reference interval $[-1, 1]$
///
/// Nodes are the roots of the Legendre polynomial $P_m$, weights are
/// $w_j = 2 / \left[ (1 - x_j^2) P_m'(x_j)^2 \right]$. The rule integrates
/// polynomials up to degree $2m - 1$ exactly and its weights sum to two. It is
/// immutable once constructed and can be shared read-only across subintervals,
/// coefficient indices and worker threads.
///
/// Roots are found by Newton iteration on the Legendre three-term recurrence.
/// The implementation is inspired by Numerical Recipes, Press et al., 1997,
/// Section 4.6
#[derive(Clone, Debug, PartialEq)]
pub struct GaussLegendreRule<T> {
    nodes: Array1<T>,
    weights: Array1<T>,
}

impl<T> GaussLegendreRule<T>
where
    T: Float,
{
    pub fn new(order: usize) -> Result<Self, EvalError> {
        if order < 1 {
            return Err(EvalError::invalid_parameter(
                "order",
                "Gauss order must be at least unity",
            ));
        }
        let mut nodes = Array1::zeros(order);
        let mut weights = Array1::zeros(order);
        let orderf: T = order.value_as().unwrap();
        // The roots are symmetric about zero, only one half is searched
        for i in 0..order.div_ceil(2) {
            let offset: T = 0.75_f32.value_as().unwrap();
            let angle = T::PI() * (i.value_as::<T>().unwrap() + offset) / (orderf + T::half());
            let mut x = T::cos(angle);
            for _ in 0..MAX_NEWTON_ITERATIONS {
                let (value, derivative) = legendre_with_derivative(order, x);
                let dx = value / derivative;
                x = x - dx;
                if T::abs(dx) <= T::epsilon() * (T::abs(x) + T::one()) {
                    break;
                }
            }
            let (_, derivative) = legendre_with_derivative(order, x);
            let weight = T::two() / ((T::one() - x * x) * derivative.powi(2));
            nodes[i] = -x;
            nodes[order - 1 - i] = x;
            weights[i] = weight;
            weights[order - 1 - i] = weight;
        }
        Ok(Self { nodes, weights })
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> &Array1<T> {
        &self.nodes
    }

    /// Weights, positionally aligned with [GaussLegendreRule::nodes]
    pub fn weights(&self) -> &Array1<T> {
        &self.weights
    }
}

/// Value and first derivative of the Legendre polynomial $P_n$ at `x`, `n >= 1`
fn legendre_with_derivative<T>(n: usize, x: T) -> (T, T)
where
    T: Float,
{
    let mut previous = T::one();
    let mut current = x;
    for k in 2..=n {
        let kf: T = k.value_as().unwrap();
        let next = ((T::two() * kf - T::one()) * x * current - (kf - T::one()) * previous) / kf;
        previous = current;
        current = next;
    }
    let nf: T = n.value_as().unwrap();
    let derivative = nf * (x * current - previous) / (x * x - T::one());
    (current, derivative)
}
