use crate::error::Result;
use crate::types::{EnrichedRecord, Record};

/// Where raw contact rows come from
pub trait RecordSource: Send + Sync {
    fn read_records(&self) -> Result<Vec<Record>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Where enriched rows go. Returns the number of rows written.
pub trait RecordSink: Send + Sync {
    fn write_records(&self, records: &[EnrichedRecord]) -> Result<usize>;

    fn describe(&self) -> String;
}
