// src/io/reporting.rs

use crate::error::ReportError;
use crate::simulation::engine::CycleReport;
use std::path::Path;
use tracing::info;

/// The result line printed for each ball count.
pub fn format_cycle_line(report: &CycleReport) -> String {
    format!("{} balls cycle after {} days.", report.balls, report.days)
}

/// Writes cycle reports to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g., "results/cycles.csv").
/// * `data` - The reports returned by the input run.
pub fn write_cycle_log(file_path: &Path, data: &[CycleReport]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_path(file_path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(
        rows = data.len(),
        path = %file_path.display(),
        "exported cycle reports"
    );
    Ok(())
}
