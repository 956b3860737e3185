use std::{collections::VecDeque, time::Instant};

use field_solver::InverseSolver;
use hhmmss::Hhmmss;
use quantum::{problem_selector::next_args, vector::Vector3D};

pub struct SyntheticRecovery;

impl SyntheticRecovery {
    /// Arguments: `bx by bz` of the target field and `ex ey ez` of the initial estimate, in Gauss.
    pub fn run(args: &mut VecDeque<String>) {
        let target = Vector3D::from(next_args(args, "target field", [10., 20., 30.]));
        let estimate = Vector3D::from(next_args(args, "estimate", [11.5, 18.5, 31.]));

        let solver = InverseSolver::builder().with_logging(100).build();
        let measured = solver.calculator().sorted_resonances(&target);
        println!("synthetic resonances [MHz]: {:.3?}", measured);

        let start = Instant::now();
        match solver.solve(&measured, estimate) {
            Ok(fit) => {
                println!("recovered {} G after {} iterations", fit.field, fit.iterations);
                println!("deviation {:.3e} G", (fit.field - target).length());
                println!("residual {:.3e} MHz^2, {:?}", fit.residual, fit.termination);
            }
            Err(err) => println!("recovery failed: {err}"),
        }

        let elapsed = start.elapsed();
        println!("solved in {}", elapsed.hhmmssxxx());
    }
}
