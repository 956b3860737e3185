use benches::random_fields;
use diol::prelude::*;
use nv_center::{HamiltonianSolver, ResonanceCalculator};

fn main() -> eyre::Result<()> {
    let bench = Bench::new(Config::from_args()?);

    bench.register("energy levels", bench_energy_levels, [1, 16, 256, 4096]);
    bench.register("sorted resonances", bench_sorted_resonances, [1, 16, 256, 4096]);

    bench.run()?;
    Ok(())
}

fn bench_energy_levels(b: Bencher, count: usize) {
    let fields = random_fields(count, 100.);
    let solver = HamiltonianSolver::default();

    b.bench(|| {
        for field in &fields {
            black_box(solver.energy_levels(field));
        }
    })
}

fn bench_sorted_resonances(b: Bencher, count: usize) {
    let fields = random_fields(count, 100.);
    let calculator = ResonanceCalculator::default();

    b.bench(|| {
        for field in &fields {
            black_box(calculator.sorted_resonances(field));
        }
    })
}
