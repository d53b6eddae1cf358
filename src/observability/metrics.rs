//! Pipeline counters.
//!
//! Recorded through the `metrics` facade; without an installed recorder
//! every call is a no-op, so library users pay nothing unless they opt in.

use std::fmt;

/// Every metric the cleaner emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RowsRead,
    RowsEnriched,
    RowsWritten,
    EmailsValid,
    EmailsInvalid,
    PhonesValid,
    PhonesInvalid,
    AddressTokenizerFailures,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RowsRead => "cc_rows_read_total",
            MetricName::RowsEnriched => "cc_rows_enriched_total",
            MetricName::RowsWritten => "cc_rows_written_total",
            MetricName::EmailsValid => "cc_emails_valid_total",
            MetricName::EmailsInvalid => "cc_emails_invalid_total",
            MetricName::PhonesValid => "cc_phones_valid_total",
            MetricName::PhonesInvalid => "cc_phones_invalid_total",
            MetricName::AddressTokenizerFailures => "cc_address_tokenizer_failures_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub mod io {
    use super::MetricName;

    pub fn rows_read(count: usize) {
        ::metrics::counter!(MetricName::RowsRead.as_str()).increment(count as u64);
    }

    pub fn rows_written(count: usize) {
        ::metrics::counter!(MetricName::RowsWritten.as_str()).increment(count as u64);
    }
}

pub mod pipeline {
    use super::MetricName;

    pub fn row_enriched() {
        ::metrics::counter!(MetricName::RowsEnriched.as_str()).increment(1);
    }

    pub fn email_checked(valid: bool) {
        let name = if valid {
            MetricName::EmailsValid
        } else {
            MetricName::EmailsInvalid
        };
        ::metrics::counter!(name.as_str()).increment(1);
    }

    pub fn phone_checked(valid: bool) {
        let name = if valid {
            MetricName::PhonesValid
        } else {
            MetricName::PhonesInvalid
        };
        ::metrics::counter!(name.as_str()).increment(1);
    }

    pub fn tokenizer_failed() {
        ::metrics::counter!(MetricName::AddressTokenizerFailures.as_str()).increment(1);
    }
}
