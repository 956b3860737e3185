use quantum::problems_impl;

use self::{axis_resonances::AxisResonancesProblem, field_sweep::FieldSweep, zero_field::ZeroField};

mod axis_resonances;
mod field_sweep;
mod zero_field;

pub struct Problems;

problems_impl!(Problems, "NV center spectra",
    "zero field spectrum" => |_| ZeroField::run(),
    "axis resonances" => AxisResonancesProblem::run,
    "field sweep" => FieldSweep::run,
);
