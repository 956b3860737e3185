use std::{collections::VecDeque, time::Instant};

use field_solver::{
    report::{save_json, Recovery},
    InverseSolver,
};
use hhmmss::Hhmmss;
use indicatif::ParallelProgressIterator;
use quantum::{problem_selector::next_arg, vector::Vector3D};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

pub struct RecoveryScan;

impl RecoveryScan {
    /// Arguments: number of random fields, maximal component in Gauss, estimate offset in Gauss.
    pub fn run(args: &mut VecDeque<String>) {
        let count = next_arg(args, "count", 200);
        let max_component = next_arg(args, "max component", 50.);
        let offset = next_arg(args, "estimate offset", 2.);

        let mut rng = StdRng::seed_from_u64(42);
        let cases: Vec<(Vector3D, Vector3D)> = (0..count)
            .map(|_| {
                let target = Vector3D::new(
                    rng.random_range(-max_component..max_component),
                    rng.random_range(-max_component..max_component),
                    rng.random_range(-max_component..max_component),
                );
                let shift = Vector3D::new(
                    rng.random_range(-offset..offset),
                    rng.random_range(-offset..offset),
                    rng.random_range(-offset..offset),
                );

                (target, target + shift)
            })
            .collect();

        let solver = InverseSolver::default();
        let start = Instant::now();
        let recoveries: Vec<Recovery> = cases
            .par_iter()
            .progress()
            .map(|&(target, estimate)| {
                let measured = solver.calculator().sorted_resonances(&target);

                match solver.solve(&measured, estimate) {
                    Ok(fit) => Recovery {
                        target,
                        estimate,
                        fit: Some(fit),
                        error: None,
                    },
                    Err(err) => Recovery {
                        target,
                        estimate,
                        fit: None,
                        error: Some(err.to_string()),
                    },
                }
            })
            .collect();

        let elapsed = start.elapsed();
        println!("recovered {count} fields in {}", elapsed.hhmmssxxx());

        let deviations: Vec<f64> = recoveries.iter().filter_map(|x| x.deviation()).collect();
        let failed = recoveries.len() - deviations.len();
        let within = deviations.iter().filter(|&&x| x < 1.).count();
        let worst = deviations.iter().copied().fold(0., f64::max);
        println!("{within} of {count} within 1 G, {failed} failed, worst deviation {worst:.3e} G");

        save_json("nv_recovery_scan", &recoveries).expect("error while saving the recovery scan");
    }
}
