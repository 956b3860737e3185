use crate::units::{
    energy_units::{Energy, EnergyUnit},
    field_units::{FieldUnit, MagneticField},
    Gauss, MHz,
};

pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let mut result = Vec::with_capacity(n);
    let step = (end - start) / (n as f64 - 1.0);

    for i in 0..n {
        result.push(start + (i as f64) * step);
    }

    result
}

pub fn unit_linspace<U: EnergyUnit>(start: Energy<U>, end: Energy<U>, n: usize) -> Vec<Energy<U>> {
    linspace(start.to_mhz(), end.to_mhz(), n)
        .into_iter()
        .map(|x| Energy(x, MHz).to(start.unit()))
        .collect()
}

pub fn field_linspace<U: FieldUnit>(
    start: MagneticField<U>,
    end: MagneticField<U>,
    n: usize,
) -> Vec<MagneticField<U>> {
    linspace(start.to_gauss(), end.to_gauss(), n)
        .into_iter()
        .map(|x| MagneticField(x, Gauss).to(start.unit()))
        .collect()
}

/// Total ordering of `f64` values used for sorting spectra,
/// NaN values are placed after every number.
pub fn sort_total(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::units::{GHz, MilliTesla};

    use super::*;

    #[test]
    fn test_linspace() {
        let values = linspace(0., 1., 5);
        assert_eq!(values, vec![0., 0.25, 0.5, 0.75, 1.]);
        assert_eq!(linspace(3., 7., 1), vec![3.]);

        let energies = unit_linspace(Energy(2.8, GHz), Energy(2.9, GHz), 3);
        assert_relative_eq!(energies[1].value(), 2.85);

        let fields = field_linspace(MagneticField(0., MilliTesla), MagneticField(10., MilliTesla), 11);
        assert_relative_eq!(fields[4].to_gauss(), 40.);
    }

    #[test]
    fn test_sort_total() {
        let mut values = vec![2875., f64::NAN, 0., 2865., -0.0];
        sort_total(&mut values);

        assert_eq!(&values[..4], &[-0.0, 0., 2865., 2875.]);
        assert!(values[4].is_nan());
    }
}
