use std::io::Error;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 7] = [
    "scenario",
    "gmv",
    "headcount",
    "travelers",
    "monthly_fee",
    "per_need_fee",
    "use_defaults",
];

/// Writes a scenarios CSV into `dir` and returns its path.
pub fn write_scenarios(dir: &Path, rows: &[[&str; 7]]) -> Result<PathBuf, Error> {
    let path = dir.join("scenarios.csv");
    let mut wtr = csv::Writer::from_path(&path)?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(path)
}
