//! Convenience re-exports of the whole public surface

pub use crate::curve::{CurveError, PeriodicFunction};
pub use crate::error::EvalError;
pub use crate::extractor::CoefficientExtractor;
pub use crate::float_trait::Float;
pub use crate::quadrature::{GaussLegendreRule, Quadrature, QuadratureSettings};
pub use crate::series::FourierSeries;
pub use crate::trace::TraceBuilder;

pub use num_complex::Complex;
