use std::{collections::VecDeque, time::Instant};

use hhmmss::Hhmmss;
use indicatif::ParallelProgressIterator;
use nv_center::{utility::save_spectrum, ResonanceCalculator};
use quantum::{
    problem_selector::{next_arg, next_args},
    units::{Gauss, MagneticField},
    utility::field_linspace,
    vector::Vector3D,
};
use rayon::prelude::*;

pub struct FieldSweep;

impl FieldSweep {
    /// Arguments: `dx dy dz` field direction, maximal field in Gauss and number of points.
    pub fn run(args: &mut VecDeque<String>) {
        let direction = Vector3D::from(next_args(args, "direction", [1., 2., 3.]));
        let max_field = next_arg(args, "max field", 100.);
        let points = next_arg(args, "points", 1000);

        let direction = direction
            .normalize()
            .expect("field direction has to be nonzero");
        println!("Sweeping field along {direction} up to {max_field} G...");

        let calculator = ResonanceCalculator::default();
        let fields = field_linspace(MagneticField(0., Gauss), MagneticField(max_field, Gauss), points);

        let start = Instant::now();
        let values: Vec<Vec<f64>> = fields
            .par_iter()
            .progress()
            .map(|field| {
                let field = direction * field.to_gauss();

                calculator.resonances(&field).to_vec()
            })
            .collect();

        let elapsed = start.elapsed();
        println!("calculated in {}", elapsed.hhmmssxxx());

        let magnitudes: Vec<f64> = fields.iter().map(|x| x.value()).collect();
        let header = "magnetic field [G]\tresonances [MHz]";
        save_spectrum(header, "nv_field_sweep", &magnitudes, &values)
            .expect("error while saving the field sweep");
    }
}
