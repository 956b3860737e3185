use nv_center::{NvConstants, ResonanceCalculator};
use quantum::{units::GHz, vector::Vector3D};

pub struct ZeroField;

impl ZeroField {
    pub fn run() {
        println!("Solving NV spectrum at zero field...");

        let consts = NvConstants::default();
        let calculator = ResonanceCalculator::new(consts);

        let levels = calculator.solver().energy_levels(&Vector3D::zero());
        for (i, energy) in levels.energies().iter().enumerate() {
            println!("E{} = {:.3} MHz ({:.6} GHz)", i + 1, energy.value(), energy.to(GHz).value());
        }

        let resonances = calculator.resonances(&Vector3D::zero());
        println!("resonances [MHz]: {:.3?}", resonances);
        println!(
            "splitting 2E = {:.3} MHz",
            resonances[0] - resonances[1]
        );
    }
}
