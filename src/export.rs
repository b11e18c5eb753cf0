/// Spreadsheet export of a computed staffing table
///
/// Writes the report rows to a single-sheet xlsx workbook named
/// `staff_calculation_<YYYYMMDD_HHMMSS>.xlsx`, timestamped with the wall
/// clock at export time.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::model::calculator::StaffingResult;
use crate::model::report;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write spreadsheet: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

fn export_filename(now: &DateTime<Local>) -> String {
    format!("staff_calculation_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Write the result table into `out_dir` and return the file path
pub fn export_result(result: &StaffingResult, out_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(export_filename(&Local::now()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_column_width(0, 30)?;
    worksheet.set_column_width(1, 14)?;

    for (col, header) in report::headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, (label, value)) in report::result_rows(result).iter().enumerate() {
        worksheet.write_string(row as u32 + 1, 0, label.as_str())?;
        worksheet.write_string(row as u32 + 1, 1, value.as_str())?;
    }

    workbook.save(&path)?;
    Ok(path)
}
