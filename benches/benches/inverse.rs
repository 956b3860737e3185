use benches::recovery_cases;
use diol::prelude::*;
use field_solver::{FieldFit, InverseSolver};
use quantum::vector::Vector3D;

fn main() -> eyre::Result<()> {
    let bench = Bench::new(Config::from_args()?);

    bench.register("inverse solve", bench_inverse_solve, [1, 4, 16]);
    bench.register("inverse solve far estimate", bench_inverse_far, [1, 4, 16]);

    bench.run()?;
    Ok(())
}

fn solve_all(solver: &InverseSolver, cases: &[([f64; 8], Vector3D)]) -> Vec<Option<FieldFit>> {
    cases
        .iter()
        .map(|(measured, estimate)| solver.solve(measured, *estimate).ok())
        .collect()
}

fn bench_inverse_solve(b: Bencher, count: usize) {
    let cases = recovery_cases(count, 1.);
    let solver = InverseSolver::default();

    b.bench(|| {
        black_box(solve_all(&solver, &cases));
    })
}

fn bench_inverse_far(b: Bencher, count: usize) {
    let cases = recovery_cases(count, 5.);
    let solver = InverseSolver::default();

    b.bench(|| {
        black_box(solve_all(&solver, &cases));
    })
}
