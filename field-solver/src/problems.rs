use quantum::problems_impl;

use self::{measured_fit::MeasuredFit, recovery_scan::RecoveryScan, synthetic_recovery::SyntheticRecovery};

mod measured_fit;
mod recovery_scan;
mod synthetic_recovery;

pub struct Problems;

problems_impl!(Problems, "NV field recovery",
    "synthetic recovery" => SyntheticRecovery::run,
    "measured fit" => MeasuredFit::run,
    "recovery scan" => RecoveryScan::run,
);
