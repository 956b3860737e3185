#[cfg(feature = "allocations")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    #[cfg(feature = "allocations")]
    energy_levels();

    #[cfg(feature = "allocations")]
    inverse_solve();
}

#[cfg(feature = "allocations")]
fn energy_levels() {
    use benches::random_fields;
    use nv_center::ResonanceCalculator;

    let fields = random_fields(100, 50.);
    let calculator = ResonanceCalculator::default();

    let _profiler = dhat::Profiler::new_heap();

    for field in &fields {
        calculator.resonances(field);
    }
}

#[cfg(feature = "allocations")]
fn inverse_solve() {
    use benches::recovery_cases;
    use field_solver::InverseSolver;

    let cases = recovery_cases(1, 1.5);
    let solver = InverseSolver::default();

    let _profiler = dhat::Profiler::new_heap();

    for (measured, estimate) in cases {
        let _ = solver.solve(&measured, estimate);
    }
}
