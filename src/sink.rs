//! Dataset serialization to the two output forms.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::OutputConfig;
use crate::pipeline::Dataset;

/// Write both output files. Called once, after the full range completes.
pub fn write_outputs(dataset: &Dataset, output: &OutputConfig) -> Result<()> {
    write_json(&output.json_file, dataset)?;
    write_csv(&output.csv_file, dataset)?;
    Ok(())
}

/// Pretty-printed JSON document keyed by level id.
pub fn write_json(path: &Path, dataset: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json)?;
    Ok(())
}

/// Values-only CSV, one row per level in id order.
///
/// No header row; the table is meant for spreadsheet import alongside the
/// self-describing JSON document.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in dataset.values() {
        writer.write_record(record.csv_row())?;
    }
    writer.flush()?;
    Ok(())
}
