use calamine::{open_workbook_auto, DataType, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::ports::RecordSource;
use crate::error::{CleanerError, Result};
use crate::types::Record;

/// Reads the first worksheet of an xls/xlsx/xlsm/xlsb/ods workbook.
pub struct SpreadsheetRecordSource {
    path: PathBuf,
    has_headers: bool,
}

impl SpreadsheetRecordSource {
    pub fn new(path: impl AsRef<Path>, has_headers: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            has_headers,
        }
    }
}

/// Render a cell as text. Empty cells are absent; numbers are coerced so a
/// phone stored as `5551234567.0` reads back as `5551234567`.
pub fn cell_to_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::Empty => None,
        DataType::String(s) if s.is_empty() => None,
        DataType::String(s) => Some(s.clone()),
        DataType::Float(v) => Some(format_number(*v)),
        DataType::Int(v) => Some(v.to_string()),
        DataType::Bool(b) => Some(b.to_string()),
        DataType::Error(e) => Some(format!("#{e:?}")),
        DataType::DateTime(v) => Some(format_number(*v)),
        DataType::DateTimeIso(s) => Some(s.clone()),
        DataType::Duration(v) => Some(format_number(*v)),
        DataType::DurationIso(s) => Some(s.clone()),
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

impl RecordSource for SpreadsheetRecordSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let sheet_name = workbook.sheet_names().first().cloned().ok_or_else(|| {
            CleanerError::UnsupportedInput(format!("{} has no worksheets", self.path.display()))
        })?;
        let range = workbook.worksheet_range(&sheet_name).ok_or_else(|| {
            CleanerError::UnsupportedInput(format!(
                "worksheet '{}' missing from {}",
                sheet_name,
                self.path.display()
            ))
        })??;

        let skip = usize::from(self.has_headers);
        let records: Vec<Record> = range
            .rows()
            .skip(skip)
            .map(|row| Record::from_cells(row.iter().map(cell_to_text)))
            .collect();

        debug!(
            "Read {} rows from sheet '{}' of {}",
            records.len(),
            sheet_name,
            self.path.display()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("spreadsheet:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_are_absent() {
        assert_eq!(cell_to_text(&DataType::Empty), None);
        assert_eq!(cell_to_text(&DataType::String(String::new())), None);
    }

    #[test]
    fn test_numeric_phone_cells_lose_fraction() {
        assert_eq!(cell_to_text(&DataType::Float(5551234567.0)).as_deref(), Some("5551234567"));
        assert_eq!(cell_to_text(&DataType::Int(62704)).as_deref(), Some("62704"));
        assert_eq!(cell_to_text(&DataType::Float(1.5)).as_deref(), Some("1.5"));
    }

    #[test]
    fn test_other_cells_are_coerced_to_text() {
        assert_eq!(cell_to_text(&DataType::Bool(true)).as_deref(), Some("true"));
        assert_eq!(
            cell_to_text(&DataType::String("100 Main St".to_string())).as_deref(),
            Some("100 Main St")
        );
    }

    #[test]
    fn test_missing_workbook_is_an_error() {
        let result = SpreadsheetRecordSource::new("does/not/exist.xlsx", false).read_records();
        assert!(result.is_err());
    }
}
