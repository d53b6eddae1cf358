use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::EnrichedRecord;

/// Result of a complete cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_rows: usize,
    pub valid_emails: usize,
    pub valid_phones: usize,
    /// Rows with both a valid email and a valid phone
    pub valid_contacts: usize,
    pub address_failures: usize,
    /// Rows handed to the sink after output filtering
    pub rows_written: usize,
}

impl PipelineSummary {
    /// Tally a finished batch. Counting happens after the fact so the row
    /// loop itself stays free of shared state.
    pub fn from_records(records: &[EnrichedRecord], started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: Utc::now(),
            total_rows: records.len(),
            valid_emails: records.iter().filter(|r| r.email_valid).count(),
            valid_phones: records.iter().filter(|r| r.phone.valid).count(),
            valid_contacts: records.iter().filter(|r| r.is_valid_contact()).count(),
            address_failures: records.iter().filter(|r| r.address_error.is_some()).count(),
            rows_written: 0,
        }
    }

    pub fn with_rows_written(mut self, rows_written: usize) -> Self {
        self.rows_written = rows_written;
        self
    }
}
