use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::ports::RecordSink;
use crate::constants::OUTPUT_COLUMNS;
use crate::error::Result;
use crate::types::{EnrichedRecord, OutputRow};

/// Writes enriched rows as CSV, truncating any existing file. The header row
/// is always written, even when no rows survive filtering.
pub struct CsvRecordSink {
    path: PathBuf,
}

impl CsvRecordSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSink for CsvRecordSink {
    fn write_records(&self, records: &[EnrichedRecord]) -> Result<usize> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(OUTPUT_COLUMNS)?;
        for record in records {
            writer.serialize(OutputRow::from(record))?;
        }
        writer.flush()?;

        info!("Created output file: {}", self.path.display());
        Ok(records.len())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
