use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::ports::RecordSource;
use crate::constants::INPUT_COLUMNS;
use crate::error::Result;
use crate::types::Record;

/// Reads a delimited contact table. Rows may be short; an empty or
/// missing field is an absent cell. Cells that are not valid UTF-8 (Latin-1
/// exports) are decoded lossily instead of failing the read.
pub struct CsvRecordSource {
    path: PathBuf,
    has_headers: bool,
}

impl CsvRecordSource {
    pub fn new(path: impl AsRef<Path>, has_headers: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            has_headers,
        }
    }
}

fn field_to_cell(field: &[u8]) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(field).into_owned())
    }
}

impl RecordSource for CsvRecordSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for (idx, result) in reader.byte_records().enumerate() {
            let row = result?;
            if std::str::from_utf8(row.as_slice()).is_err() {
                debug!("Row {} is not valid UTF-8, replacing undecodable bytes", idx + 1);
            }
            if row.len() > INPUT_COLUMNS.len() {
                debug!(
                    "Row {} has {} cells, ignoring everything after '{}'",
                    idx + 1,
                    row.len(),
                    INPUT_COLUMNS[INPUT_COLUMNS.len() - 1]
                );
            }
            records.push(Record::from_cells(row.iter().map(field_to_cell)));
        }

        debug!("Read {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
