pub mod consts;
pub mod hamiltonian;
pub mod resonances;
pub mod utility;

pub use consts::NvConstants;
pub use hamiltonian::{EnergyLevels, HamiltonianSolver};
pub use resonances::{AxisResonances, NvAxis, ResonanceCalculator};
