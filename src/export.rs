//! Spreadsheet export of harvested publication records.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::common::{PublicationRecord, COLUMNS};

/// Output filename for a run starting now: `scholar_data_<YYYYMMDD_HHMMSS>.xlsx`
pub fn timestamped_filename() -> String {
    let stamp = OffsetDateTime::now_utc()
        .format(format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .expect("timestamp format description is static");
    format!("scholar_data_{}.xlsx", stamp)
}

/// Write records to one worksheet: a header row of [`COLUMNS`], then one row
/// per record in collection order.
pub fn write_workbook(records: &[PublicationRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .context("Failed to write header row")?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.to_row().iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, *value)
                .with_context(|| format!("Failed to write record row {}", row + 1))?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))?;
    Ok(())
}
