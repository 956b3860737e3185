use std::{
    fs::{create_dir_all, File},
    io::{Error, ErrorKind, Write},
    path::PathBuf,
};

use nv_center::utility::data_path;
use quantum::vector::Vector3D;
use serde::{Deserialize, Serialize};

use crate::inverse::FieldFit;

/// Outcome of recovering a known field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recovery {
    pub target: Vector3D,
    pub estimate: Vector3D,
    pub fit: Option<FieldFit>,
    pub error: Option<String>,
}

impl Recovery {
    /// Distance in Gauss between the recovered and the target field.
    pub fn deviation(&self) -> Option<f64> {
        self.fit
            .as_ref()
            .map(|fit| (fit.field - self.target).length())
    }
}

/// Saves `value` as pretty printed JSON to `data/{filename}.json`.
pub fn save_json<T: Serialize>(filename: &str, value: &T) -> Result<PathBuf, Error> {
    let mut path = data_path(filename)?;
    path.set_extension("json");

    let filepath = path
        .parent()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "data path has no parent"))?;
    if !filepath.exists() {
        create_dir_all(filepath)?;
        println!("created path {}", filepath.display());
    }

    let buf = serde_json::to_string_pretty(value)?;
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod test {
    use crate::inverse::FitTermination;

    use super::*;

    #[test]
    fn test_recovery_serialization() {
        let recovery = Recovery {
            target: Vector3D::new(1., 2., 3.),
            estimate: Vector3D::new(1.5, 2., 3.),
            fit: Some(FieldFit {
                field: Vector3D::new(1., 2., 4.),
                residual: 0.,
                measurements: 8,
                iterations: 42,
                termination: FitTermination::Converged,
            }),
            error: None,
        };
        assert_eq!(recovery.deviation(), Some(1.));

        let json = serde_json::to_string(&recovery).unwrap();
        let parsed: Recovery = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recovery);

        let failed = Recovery {
            fit: None,
            error: Some("no measured resonances were given".to_string()),
            ..recovery
        };
        assert_eq!(failed.deviation(), None);
    }
}
