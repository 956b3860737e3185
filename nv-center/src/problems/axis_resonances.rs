use std::collections::VecDeque;

use nv_center::ResonanceCalculator;
use quantum::{problem_selector::next_args, vector::Vector3D};

pub struct AxisResonancesProblem;

impl AxisResonancesProblem {
    /// Arguments: `bx by bz` of the lab frame field in Gauss.
    pub fn run(args: &mut VecDeque<String>) {
        let field = Vector3D::from(next_args(args, "field", [10., 20., 30.]));
        println!("Resonances of all NV orientations for {field} G");

        let calculator = ResonanceCalculator::default();
        for axis in calculator.axis_resonances(&field) {
            let nv_field = axis.axis.to_nv_frame(&field);

            println!(
                "{:?} axis, direction {}, B_NV = {}",
                axis.axis,
                axis.axis.direction(),
                nv_field
            );
            println!("\tE3 - E1 = {:.3} MHz, E2 - E1 = {:.3} MHz", axis.upper, axis.lower);
        }

        println!("sorted [MHz]: {:.3?}", calculator.sorted_resonances(&field));
    }
}
