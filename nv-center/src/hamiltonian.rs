use std::f64::consts::FRAC_1_SQRT_2;

use faer::{Mat, MatRef, Side};
use num::complex::{Complex64, ComplexFloat};
use quantum::{
    units::{energy_units::Energy, MHz},
    utility::sort_total,
    vector::Vector3D,
};
use serde::{Deserialize, Serialize};

use crate::consts::NvConstants;

/// Energy levels of the NV ground state triplet in MHz, sorted ascending.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevels([f64; 3]);

impl EnergyLevels {
    pub fn from_unsorted(mut levels: [f64; 3]) -> Self {
        sort_total(&mut levels);

        Self(levels)
    }

    /// Levels of a Hamiltonian that could not be diagonalized, e.g. for non-finite fields.
    pub fn undefined() -> Self {
        Self([f64::NAN; 3])
    }

    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    pub fn energies(&self) -> [Energy<MHz>; 3] {
        self.0.map(|value| Energy(value, MHz))
    }

    pub fn lowest(&self) -> f64 {
        self.0[0]
    }

    pub fn middle(&self) -> f64 {
        self.0[1]
    }

    pub fn highest(&self) -> f64 {
        self.0[2]
    }

    /// Transition from the lowest to the highest level, E3 - E1.
    pub fn upper_transition(&self) -> f64 {
        self.highest() - self.lowest()
    }

    /// Transition from the lowest to the middle level, E2 - E1.
    pub fn lower_transition(&self) -> f64 {
        self.middle() - self.lowest()
    }

    pub fn is_defined(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

/// Spin-1 Hamiltonian of the NV center for a magnetic field given in the NV frame,
/// where z is the NV symmetry axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianSolver {
    consts: NvConstants,
}

impl HamiltonianSolver {
    pub fn new(consts: NvConstants) -> Self {
        Self { consts }
    }

    pub fn constants(&self) -> &NvConstants {
        &self.consts
    }

    /// Returns the Hamiltonian `H = Hss + g Hz` in MHz for the field in Gauss,
    /// in the basis of spin projections `|+1>, |0>, |-1>`.
    pub fn hamiltonian(&self, field: &Vector3D) -> Mat<Complex64> {
        let d = self.consts.zero_field_splitting;
        let e = self.consts.asymmetry;
        let g = self.consts.gyromagnetic_ratio;

        let (bx, by, bz) = field.components();
        let b_plus = Complex64::new(bx, by) * FRAC_1_SQRT_2;
        let b_minus = b_plus.conj();

        let real = |x: f64| Complex64::new(x, 0.);
        let elements = [
            [real(d + g * bz), b_plus * g, real(e)],
            [b_minus * g, real(0.), b_plus * g],
            [real(e), b_minus * g, real(d - g * bz)],
        ];

        Mat::from_fn(3, 3, |i, j| elements[i][j])
    }

    /// Energy levels for the field in the NV frame.
    ///
    /// Eigenvalue magnitudes are taken, so that levels are non-negative.
    /// Non-finite fields give [undefined][EnergyLevels::undefined] levels.
    pub fn energy_levels(&self, field: &Vector3D) -> EnergyLevels {
        if !field.is_finite() {
            return EnergyLevels::undefined();
        }

        let hamiltonian = self.hamiltonian(field);

        match eigenvalue_magnitudes(hamiltonian.as_ref()) {
            Some(levels) => EnergyLevels::from_unsorted(levels),
            None => EnergyLevels::undefined(),
        }
    }
}

fn eigenvalue_magnitudes(mat: MatRef<Complex64>) -> Option<[f64; 3]> {
    let eigen = mat.self_adjoint_eigen(Side::Lower).ok()?;

    let mut levels = [f64::NAN; 3];
    for (level, value) in levels.iter_mut().zip(eigen.S().column_vector().iter()) {
        *level = value.abs();
    }

    Some(levels)
}
