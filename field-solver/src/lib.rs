pub mod cost;
pub mod error;
pub mod inverse;
pub mod report;

pub use cost::{LengthPolicy, ResonanceMismatch};
pub use error::FitError;
pub use inverse::{FieldFit, FitTermination, InverseSolver, InverseSolverBuilder};
