use quantum::{
    utility::sort_total,
    vector::{Axis, Vector3D},
};
use serde::{Deserialize, Serialize};

use crate::{
    consts::NvConstants,
    hamiltonian::{EnergyLevels, HamiltonianSolver},
};

/// Angle in degrees between a <111> NV axis and the plane spanned by two cubic axes,
/// arccos(1 / √3).
pub const NV_POLAR_ANGLE_DEG: f64 = 54.73561031724535;

/// One of the four crystallographic orientations of the NV axis in diamond.
///
/// The lab frame field is brought into the NV frame by a rotation about z
/// followed by a rotation about y.
/// Lab frame directions of the axes are, up to sign,
/// `[-1, 1, 1]`, `[-1, -1, -1]`, `[1, -1, 1]` and `[1, 1, -1]` (normalized).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NvAxis {
    First,
    Second,
    Third,
    Fourth,
}

impl NvAxis {
    pub const ALL: [NvAxis; 4] = [NvAxis::First, NvAxis::Second, NvAxis::Third, NvAxis::Fourth];

    /// Rotation angles `(y, z)` in degrees bringing the lab frame onto this axis.
    pub fn rotation_angles(&self) -> (f64, f64) {
        match self {
            NvAxis::First => (NV_POLAR_ANGLE_DEG, 45.),
            NvAxis::Second => (180. - NV_POLAR_ANGLE_DEG, -45.),
            NvAxis::Third => (-NV_POLAR_ANGLE_DEG, 45.),
            NvAxis::Fourth => (-180. + NV_POLAR_ANGLE_DEG, -45.),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            NvAxis::First => 0,
            NvAxis::Second => 1,
            NvAxis::Third => 2,
            NvAxis::Fourth => 3,
        }
    }

    /// Expresses the lab frame `field` in the frame of this NV axis.
    pub fn to_nv_frame(&self, field: &Vector3D) -> Vector3D {
        let (y_angle, z_angle) = self.rotation_angles();

        field
            .rotate_axis(Axis::Z, z_angle.to_radians())
            .rotate_axis(Axis::Y, y_angle.to_radians())
    }

    /// Unit vector of the NV symmetry axis in the lab frame.
    pub fn direction(&self) -> Vector3D {
        let (y_angle, z_angle) = self.rotation_angles();

        Vector3D::unit_vector(Axis::Z)
            .rotate_axis(Axis::Y, -y_angle.to_radians())
            .rotate_axis(Axis::Z, -z_angle.to_radians())
    }
}

/// Resonances of a single NV orientation in MHz.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisResonances {
    pub axis: NvAxis,
    pub levels: EnergyLevels,
    /// E3 - E1
    pub upper: f64,
    /// E2 - E1
    pub lower: f64,
}

/// Calculates ODMR resonances of all four NV orientations for a lab frame field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResonanceCalculator {
    solver: HamiltonianSolver,
}

impl ResonanceCalculator {
    pub fn new(consts: NvConstants) -> Self {
        Self {
            solver: HamiltonianSolver::new(consts),
        }
    }

    pub fn solver(&self) -> &HamiltonianSolver {
        &self.solver
    }

    pub fn axis_resonances(&self, field: &Vector3D) -> [AxisResonances; 4] {
        NvAxis::ALL.map(|axis| {
            let levels = self.solver.energy_levels(&axis.to_nv_frame(field));

            AxisResonances {
                axis,
                levels,
                upper: levels.upper_transition(),
                lower: levels.lower_transition(),
            }
        })
    }

    /// Resonances in MHz ordered by NV axis as `[E3 - E1, E2 - E1]` pairs.
    pub fn resonances(&self, field: &Vector3D) -> [f64; 8] {
        let mut resonances = [0.; 8];

        for (pair, axis) in resonances.chunks_exact_mut(2).zip(self.axis_resonances(field)) {
            pair[0] = axis.upper;
            pair[1] = axis.lower;
        }

        resonances
    }

    /// Resonances in MHz sorted ascending, as they appear in a measured spectrum.
    pub fn sorted_resonances(&self, field: &Vector3D) -> [f64; 8] {
        let mut resonances = self.resonances(field);
        sort_total(&mut resonances);

        resonances
    }
}

impl From<HamiltonianSolver> for ResonanceCalculator {
    fn from(solver: HamiltonianSolver) -> Self {
        Self { solver }
    }
}

#[cfg(test)]
mod test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use quantum::units::{Energy, MHz};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn assert_vec_eq(a: Vector3D, b: Vector3D, epsilon: f64) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
        assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
        assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn test_axis_directions() {
        let sqrt3 = 3f64.sqrt();
        let expected = [
            Vector3D::new(-1., 1., 1.),
            Vector3D::new(-1., -1., -1.),
            Vector3D::new(1., -1., 1.),
            Vector3D::new(1., 1., -1.),
        ];

        for (axis, expected) in NvAxis::ALL.iter().zip(expected) {
            assert_vec_eq(axis.direction(), expected * (1. / sqrt3), 1e-12);
        }

        for a in NvAxis::ALL {
            for b in NvAxis::ALL.iter().filter(|&&b| b != a) {
                let cos = a.direction().scalar_product(&b.direction());
                assert_relative_eq!(cos.abs(), 1. / 3., epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_nv_frame() {
        for axis in NvAxis::ALL {
            let field = axis.direction() * 25.;
            assert_vec_eq(axis.to_nv_frame(&field), Vector3D::new(0., 0., 25.), 1e-12);
        }
    }

    #[test]
    fn test_zero_field() {
        let calculator = ResonanceCalculator::default();
        let resonances = calculator.resonances(&Vector3D::zero());

        for pair in resonances.chunks(2) {
            assert_relative_eq!(pair[0], 2875., epsilon = 1e-9);
            assert_relative_eq!(pair[1], 2865., epsilon = 1e-9);
            assert_relative_eq!(pair[0] - pair[1], 10., epsilon = 1e-9);
        }

        let sorted = calculator.sorted_resonances(&Vector3D::zero());
        for value in &sorted[..4] {
            assert_relative_eq!(*value, 2865., epsilon = 1e-9);
        }
        for value in &sorted[4..] {
            assert_relative_eq!(*value, 2875., epsilon = 1e-9);
        }
    }

    #[test]
    fn test_aligned_field() {
        let consts = NvConstants::default().with_asymmetry(Energy(0., MHz));
        let calculator = ResonanceCalculator::new(consts);
        let field = NvAxis::Third.direction() * 50.;

        let axes = calculator.axis_resonances(&field);
        assert_eq!(axes.map(|a| a.axis), NvAxis::ALL);

        let aligned = &axes[NvAxis::Third.index()];
        assert_relative_eq!(aligned.upper, 2870. + 140., epsilon = 1e-9);
        assert_relative_eq!(aligned.lower, 2870. - 140., epsilon = 1e-9);

        let others: Vec<&AxisResonances> = axes.iter().filter(|a| a.axis != NvAxis::Third).collect();
        for pair in others.windows(2) {
            assert_relative_eq!(pair[0].upper, pair[1].upper, epsilon = 1e-9);
            assert_relative_eq!(pair[0].lower, pair[1].lower, epsilon = 1e-9);
        }
        assert!(others[0].upper - others[0].lower < aligned.upper - aligned.lower);
    }

    #[test]
    fn test_swapped_field_spectrum() {
        let calculator = ResonanceCalculator::default();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let (x, y, z) = (
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            );

            let sorted = calculator.sorted_resonances(&Vector3D::new(x, y, z));
            let swapped = calculator.sorted_resonances(&Vector3D::new(y, x, z));
            for (a, b) in sorted.iter().zip(&swapped) {
                assert_relative_eq!(*a, *b, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_resonance_ordering() {
        let calculator = ResonanceCalculator::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let field = Vector3D::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            );

            let resonances = calculator.resonances(&field);
            let sorted = calculator.sorted_resonances(&field);

            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            for pair in resonances.chunks(2) {
                assert!(pair[0] >= pair[1]);
            }

            let mut expected = resonances;
            expected.sort_by(|a, b| a.total_cmp(b));
            assert_eq!(sorted, expected);

            let reversed = calculator.resonances(&-field);
            for (a, b) in resonances.iter().zip(reversed) {
                assert_relative_eq!(*a, b, epsilon = 1e-8);
            }
        }
    }
}
