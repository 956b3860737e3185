use argmin::{
    core::{
        observers::ObserverMode, Executor, State, TerminationReason, TerminationStatus,
    },
    solver::neldermead::NelderMead,
};
use argmin_observer_slog::SlogLogger;
use nv_center::{NvConstants, ResonanceCalculator};
use quantum::vector::{Axis, Vector3D};
use serde::{Deserialize, Serialize};

use crate::{
    cost::{LengthPolicy, ResonanceMismatch},
    error::FitError,
};

pub const RESONANCE_COUNT: usize = 8;

pub const DEFAULT_SIMPLEX_STEP: f64 = 1.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_MAX_ITERATIONS: u64 = 2000;

/// Reason the minimizer stopped for a successful fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitTermination {
    /// Simplex cost spread fell below the tolerance.
    Converged,
    /// Residual reached the target cost.
    TargetReached,
    /// Minimizer stopped for any other reason.
    Stopped,
}

impl From<&TerminationStatus> for FitTermination {
    fn from(status: &TerminationStatus) -> Self {
        match status {
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                FitTermination::Converged
            }
            TerminationStatus::Terminated(TerminationReason::TargetCostReached) => {
                FitTermination::TargetReached
            }
            _ => FitTermination::Stopped,
        }
    }
}

/// Lab frame field recovered from measured resonances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldFit {
    /// Recovered field in Gauss
    pub field: Vector3D,
    /// Sum of squared resonance deviations in MHz^2
    pub residual: f64,
    pub measurements: usize,
    pub iterations: u64,
    pub termination: FitTermination,
}

impl FieldFit {
    /// Root mean square deviation of a single resonance in MHz.
    pub fn rms_deviation(&self) -> f64 {
        (self.residual / self.measurements as f64).sqrt()
    }
}

#[derive(Clone, Debug)]
pub struct InverseSolverBuilder {
    consts: NvConstants,
    simplex_step: f64,
    tolerance: f64,
    max_iterations: u64,
    length_policy: LengthPolicy,
    log_every: Option<u64>,
}

impl Default for InverseSolverBuilder {
    fn default() -> Self {
        Self {
            consts: NvConstants::default(),
            simplex_step: DEFAULT_SIMPLEX_STEP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            length_policy: LengthPolicy::default(),
            log_every: None,
        }
    }
}

impl InverseSolverBuilder {
    pub fn with_constants(mut self, consts: NvConstants) -> Self {
        self.consts = consts;

        self
    }

    /// Offset in Gauss of the initial simplex vertices along each lab axis.
    pub fn with_simplex_step(mut self, step: f64) -> Self {
        assert!(step.is_finite() && step > 0., "simplex step has to be positive");
        self.simplex_step = step;

        self
    }

    /// Standard deviation of the simplex costs below which the minimizer stops.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0., "tolerance has to be positive");
        self.tolerance = tolerance;

        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;

        self
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;

        self
    }

    /// Logs the minimizer state to the terminal every `every` iterations.
    pub fn with_logging(mut self, every: u64) -> Self {
        self.log_every = Some(every);

        self
    }

    pub fn build(self) -> InverseSolver {
        InverseSolver {
            calculator: ResonanceCalculator::new(self.consts),
            simplex_step: self.simplex_step,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            length_policy: self.length_policy,
            log_every: self.log_every,
        }
    }
}

/// Recovers the lab frame magnetic field from measured ODMR resonances
/// by Nelder-Mead minimization of the squared resonance mismatch.
#[derive(Clone, Debug)]
pub struct InverseSolver {
    calculator: ResonanceCalculator,
    simplex_step: f64,
    tolerance: f64,
    max_iterations: u64,
    length_policy: LengthPolicy,
    log_every: Option<u64>,
}

impl Default for InverseSolver {
    fn default() -> Self {
        InverseSolverBuilder::default().build()
    }
}

impl InverseSolver {
    pub fn builder() -> InverseSolverBuilder {
        InverseSolverBuilder::default()
    }

    pub fn calculator(&self) -> &ResonanceCalculator {
        &self.calculator
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Squared mismatch in MHz^2 between `measured` and the resonances of `field`.
    pub fn residual(&self, measured: &[f64], field: &Vector3D) -> f64 {
        ResonanceMismatch::new(self.calculator, measured.to_vec()).residual(field)
    }

    /// Finds the field in Gauss whose sorted resonances best match `measured`,
    /// starting the search at `estimate`.
    ///
    /// `measured` are ODMR resonances in MHz sorted ascending.
    /// The sorted spectrum does not change when the x and y components of the field
    /// are swapped, so the fit converges to whichever of the two partners
    /// lies closer to `estimate`.
    pub fn solve(&self, measured: &[f64], estimate: Vector3D) -> Result<FieldFit, FitError> {
        self.validate(measured, &estimate)?;

        let cost = ResonanceMismatch::new(self.calculator, measured.to_vec());
        let solver = NelderMead::new(self.initial_simplex(&estimate))
            .with_sd_tolerance(self.tolerance)
            .map_err(FitError::optimizer)?;

        let mut executor =
            Executor::new(cost, solver).configure(|state| state.max_iters(self.max_iterations));
        if let Some(every) = self.log_every {
            executor = executor.add_observer(SlogLogger::term(), ObserverMode::Every(every));
        }

        let result = executor.run().map_err(FitError::optimizer)?;
        let state = result.state();

        let best = state
            .get_best_param()
            .ok_or_else(|| FitError::Optimizer("minimizer returned no parameters".to_string()))?;
        let field = Vector3D::new(best[0], best[1], best[2]);
        let residual = state.get_best_cost();
        let iterations = state.get_iter();

        match state.get_termination_status() {
            TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
                Err(FitError::NonConvergence {
                    best: field,
                    residual,
                    iterations,
                })
            }
            status => Ok(FieldFit {
                field,
                residual,
                measurements: measured.len().min(RESONANCE_COUNT),
                iterations,
                termination: FitTermination::from(status),
            }),
        }
    }

    fn validate(&self, measured: &[f64], estimate: &Vector3D) -> Result<(), FitError> {
        if measured.is_empty() {
            return Err(FitError::NoMeasurements);
        }

        if self.length_policy == LengthPolicy::Exact && measured.len() != RESONANCE_COUNT {
            return Err(FitError::LengthMismatch {
                expected: RESONANCE_COUNT,
                found: measured.len(),
            });
        }

        if let Some(index) = measured.iter().position(|x| !x.is_finite()) {
            return Err(FitError::NonFiniteMeasurement(index));
        }

        if !estimate.is_finite() {
            return Err(FitError::NonFiniteSeed(*estimate));
        }

        Ok(())
    }

    fn initial_simplex(&self, estimate: &Vector3D) -> Vec<Vec<f64>> {
        let mut simplex = vec![estimate.to_array().to_vec()];

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let vertex = *estimate + Vector3D::unit_vector(axis) * self.simplex_step;
            simplex.push(vertex.to_array().to_vec());
        }

        simplex
    }
}
