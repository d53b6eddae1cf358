pub mod csv_sink;
pub mod csv_source;
pub mod spreadsheet_source;

use std::path::Path;

use crate::app::ports::RecordSource;
use crate::constants::{CSV_EXTENSIONS, SPREADSHEET_EXTENSIONS};
use crate::error::{CleanerError, Result};

pub use csv_sink::CsvRecordSink;
pub use csv_source::CsvRecordSource;
pub use spreadsheet_source::SpreadsheetRecordSource;

/// Pick a reader for the input table based on its file extension.
pub fn source_for_path(path: &Path, has_headers: bool) -> Result<Box<dyn RecordSource>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if CSV_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Box::new(CsvRecordSource::new(path, has_headers)))
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Box::new(SpreadsheetRecordSource::new(path, has_headers)))
    } else {
        Err(CleanerError::UnsupportedInput(format!(
            "no reader for '{}' (expected one of: {}, {})",
            path.display(),
            CSV_EXTENSIONS.join(", "),
            SPREADSHEET_EXTENSIONS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_known_extensions() {
        assert!(source_for_path(Path::new("Files/contacts.csv"), false).is_ok());
        assert!(source_for_path(Path::new("Files/contacts.CSV"), false).is_ok());
        assert!(source_for_path(Path::new("Files/missing_headers.xls"), false).is_ok());
        assert!(source_for_path(Path::new("Files/contacts.xlsx"), true).is_ok());
    }

    #[test]
    fn test_source_for_unknown_extension() {
        let result = source_for_path(Path::new("Files/contacts.json"), false);
        assert!(matches!(result, Err(CleanerError::UnsupportedInput(_))));
        assert!(source_for_path(Path::new("Files/contacts"), false).is_err());
    }
}
