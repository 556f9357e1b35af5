use crate::curve::CurveError;

/// Error returned from [crate::CoefficientExtractor], [crate::Quadrature] and the
/// constructors of [crate::FourierSeries]
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("invalid parameter {param}: {message}")]
    InvalidParameter {
        param: &'static str,
        message: String,
    },

    #[error("index collection length {indices} does not match coefficient collection length {coefficients}")]
    ShapeMismatch { indices: usize, coefficients: usize },

    #[error("integrand produced a non-finite value at t = {t}")]
    NonFiniteIntegrand { t: f64 },

    #[error("integral over [{a}, {b}] accumulated to a non-finite value")]
    NonFiniteIntegral { a: f64, b: f64 },

    #[error("Fourier coefficient at index {index} is not finite")]
    NonFiniteCoefficient { index: i64 },

    #[error("periodic function evaluation failed while computing coefficient {index}")]
    UpstreamFailure {
        index: i64,
        #[source]
        source: CurveError,
    },
}

impl EvalError {
    pub(crate) fn invalid_parameter(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            message: message.into(),
        }
    }
}
