use std::{
    fs::{create_dir_all, File},
    io::{Error, ErrorKind, Write},
    path::PathBuf,
};

/// Path of the data file `data/{filename}.dat` relative to the working directory.
pub fn data_path(filename: &str) -> Result<PathBuf, Error> {
    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension("dat");

    Ok(path)
}

/// Formats spectrum rows as tab separated lines, one row per parameter value.
pub fn format_spectrum(header: &str, parameter: &[f64], values: &[Vec<f64>]) -> String {
    assert_eq!(
        parameter.len(),
        values.len(),
        "parameters and values have to have the same length"
    );

    let mut buf = header.to_string();

    for (p, row) in parameter.iter().zip(values.iter()) {
        let line = row
            .iter()
            .fold(format!("{:e}", p), |s, val| s + &format!("\t{:e}", val));

        buf.push_str(&format!("\n{line}"))
    }

    buf
}

pub fn save_spectrum(
    header: &str,
    filename: &str,
    parameter: &[f64],
    values: &[Vec<f64>],
) -> Result<PathBuf, Error> {
    let path = data_path(filename)?;
    let filepath = path
        .parent()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "data path has no parent"))?;

    if !filepath.exists() {
        create_dir_all(filepath)?;
        println!("created path {}", filepath.display());
    }

    let buf = format_spectrum(header, parameter, values);
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_spectrum() {
        let buf = format_spectrum(
            "field [G]\tresonances [MHz]",
            &[0., 10.],
            &[vec![2865., 2875.], vec![2837., 2903.]],
        );

        let lines: Vec<&str> = buf.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "field [G]\tresonances [MHz]");
        assert_eq!(lines[1], "0e0\t2.865e3\t2.875e3");
        assert_eq!(lines[2], "1e1\t2.837e3\t2.903e3");
    }

    #[test]
    fn test_data_path() {
        let path = data_path("nv/sweep").unwrap();

        assert!(path.ends_with("data/nv/sweep.dat"));
    }
}
