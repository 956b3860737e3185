use nv_center::ResonanceCalculator;
use quantum::vector::Vector3D;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random lab frame fields with components up to `max_component` Gauss.
pub fn random_fields(count: usize, max_component: f64) -> Vec<Vector3D> {
    let mut rng = StdRng::seed_from_u64(1);

    (0..count)
        .map(|_| {
            Vector3D::new(
                rng.random_range(-max_component..=max_component),
                rng.random_range(-max_component..=max_component),
                rng.random_range(-max_component..=max_component),
            )
        })
        .collect()
}

/// Sorted resonances of the fields together with estimates shifted by `offset` Gauss along each axis.
pub fn recovery_cases(count: usize, offset: f64) -> Vec<([f64; 8], Vector3D)> {
    let calculator = ResonanceCalculator::default();

    random_fields(count, 50.)
        .into_iter()
        .map(|field| {
            let estimate = field + Vector3D::new(offset, -offset, offset);

            (calculator.sorted_resonances(&field), estimate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup() {
        let fields = random_fields(10, 5.);
        assert_eq!(fields.len(), 10);
        assert!(fields.iter().all(|x| x.to_array().iter().all(|c| c.abs() <= 5.)));
        assert_eq!(fields, random_fields(10, 5.));

        let cases = recovery_cases(3, 1.);
        assert_eq!(cases.len(), 3);
        assert!(cases.iter().all(|(measured, _)| measured.is_sorted()));
    }
}
