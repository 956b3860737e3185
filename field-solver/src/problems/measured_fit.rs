use std::collections::VecDeque;

use field_solver::{InverseSolver, LengthPolicy};
use quantum::{problem_selector::next_args, utility::sort_total, vector::Vector3D};

pub struct MeasuredFit;

impl MeasuredFit {
    /// Arguments: 8 measured resonances `f1 .. f8` in MHz followed by `bx by bz` estimate in Gauss.
    pub fn run(args: &mut VecDeque<String>) {
        let mut measured = next_args(
            args,
            "resonances",
            [2720.4, 2786.9, 2818.0, 2831.8, 2906.1, 2925.9, 2953.3, 3019.9],
        );
        let estimate = Vector3D::from(next_args(args, "estimate", [0., 0., 0.]));
        sort_total(&mut measured);

        let solver = InverseSolver::builder()
            .with_length_policy(LengthPolicy::Exact)
            .build();

        println!("fitting resonances [MHz]: {:?}", measured);
        match solver.solve(&measured, estimate) {
            Ok(fit) => {
                let (bx, by, bz) = fit.field.components();
                println!("B = ({bx:.3}, {by:.3}, {bz:.3}) G, |B| = {:.3} G", fit.field.length());
                println!(
                    "rms deviation {:.3e} MHz after {} iterations",
                    fit.rms_deviation(),
                    fit.iterations
                );

                let calculated = solver.calculator().sorted_resonances(&fit.field);
                println!("calculated resonances [MHz]: {:.3?}", calculated);
            }
            Err(err) => println!("fit failed: {err}"),
        }
    }
}
