use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::observability::metrics;
use crate::pipeline::processing::address::{self, AddressFields, AddressTokenizer, RuleTokenizer};
use crate::pipeline::processing::email::EmailValidator;
use crate::pipeline::processing::{name, phone};
use crate::types::{EnrichedRecord, Record};

/// Turns raw contact rows into enriched rows.
///
/// Every row is handled on its own: no running totals, no filtering, no
/// dedup. The output has exactly one entry per input row, in input order,
/// whether the rows are mapped sequentially or across the rayon pool.
pub struct RecordPipeline {
    tokenizer: Box<dyn AddressTokenizer>,
    email: EmailValidator,
    parallel: bool,
}

impl RecordPipeline {
    pub fn new(tokenizer: Box<dyn AddressTokenizer>, config: &PipelineConfig) -> Self {
        Self {
            tokenizer,
            email: EmailValidator::new(config.email_match),
            parallel: config.parallel,
        }
    }

    /// Create a pipeline backed by the built-in rule tokenizer
    pub fn with_default_tokenizer(config: &PipelineConfig) -> Self {
        Self::new(Box::new(RuleTokenizer::new()), config)
    }

    /// Normalize a single row. Never fails: each field degrades to an
    /// empty or false value instead.
    pub fn enrich(&self, record: &Record) -> EnrichedRecord {
        let name = name::split(record.name.as_deref().unwrap_or_default());

        let email = record.email.clone().unwrap_or_default();
        let email_valid = self.email.is_valid(&email);
        metrics::pipeline::email_checked(email_valid);

        let phone = phone::normalize(record.phone.as_deref().unwrap_or_default());
        metrics::pipeline::phone_checked(phone.valid);

        let (address, address_error) =
            match address::parse_address(self.tokenizer.as_ref(), &record.address_lines) {
                Ok(fields) => (fields, None),
                Err(e) => {
                    warn!(error = %e, "Address tokenizer failed, leaving address fields empty");
                    metrics::pipeline::tokenizer_failed();
                    (AddressFields::default(), Some(e.to_string()))
                }
            };

        debug!(
            last_name = %name.last,
            email_valid,
            phone_valid = phone.valid,
            "Enriched row"
        );
        metrics::pipeline::row_enriched();

        EnrichedRecord {
            record: record.clone(),
            name,
            email,
            email_valid,
            phone,
            address,
            address_error,
        }
    }

    /// Enrich every row, preserving input order.
    pub fn process(&self, rows: &[Record]) -> Vec<EnrichedRecord> {
        info!(rows = rows.len(), parallel = self.parallel, "Processing contact rows");

        if self.parallel {
            rows.par_iter().map(|row| self.enrich(row)).collect()
        } else {
            rows.iter().map(|row| self.enrich(row)).collect()
        }
    }
}
