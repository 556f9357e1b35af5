#![doc = include_str!("../README.md")]


mod curve;
pub use curve::{CurveError, PeriodicFunction};

mod error;
pub use error::EvalError;

mod extractor;
pub use extractor::CoefficientExtractor;

mod float_trait;
pub use float_trait::Float;

pub mod prelude;

pub mod quadrature;
pub use quadrature::{GaussLegendreRule, Quadrature, QuadratureSettings};

mod series;
pub use series::FourierSeries;

mod trace;
pub use trace::TraceBuilder;

mod types;
pub use types::ArrayRef1;

pub use num_complex::Complex;
