use quantum::vector::Vector3D;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FitError {
    #[error("no measured resonances were given")]
    NoMeasurements,

    #[error("expected {expected} measured resonances, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("measured resonance at position {0} is not finite")]
    NonFiniteMeasurement(usize),

    #[error("initial field estimate {0} is not finite")]
    NonFiniteSeed(Vector3D),

    #[error(
        "minimizer did not converge in {iterations} iterations, best field {best} has residual {residual} MHz^2"
    )]
    NonConvergence {
        best: Vector3D,
        residual: f64,
        iterations: u64,
    },

    #[error("optimizer failure: {0}")]
    Optimizer(String),
}

impl FitError {
    pub(crate) fn optimizer(err: argmin_math::Error) -> Self {
        FitError::Optimizer(err.to_string())
    }
}
