use crate::config::OutputConfig;
use crate::types::EnrichedRecord;

/// Row selection done by the caller once the pipeline has finished.
/// The pipeline never drops rows; this is the only place that does.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFilter {
    pub only_valid_contacts: bool,
    pub skip_unparsed_addresses: bool,
}

impl From<&OutputConfig> for OutputFilter {
    fn from(config: &OutputConfig) -> Self {
        Self {
            only_valid_contacts: config.only_valid_contacts,
            skip_unparsed_addresses: config.skip_unparsed_addresses,
        }
    }
}

impl OutputFilter {
    pub fn keep(&self, record: &EnrichedRecord) -> bool {
        if self.only_valid_contacts && !record.is_valid_contact() {
            return false;
        }
        if self.skip_unparsed_addresses && record.address_error.is_some() {
            return false;
        }
        true
    }

    pub fn apply(&self, records: Vec<EnrichedRecord>) -> Vec<EnrichedRecord> {
        records.into_iter().filter(|r| self.keep(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::address::AddressFields;
    use crate::pipeline::processing::name::NameParts;
    use crate::pipeline::processing::phone;
    use crate::types::Record;

    fn enriched(email_valid: bool, raw_phone: &str, address_error: Option<&str>) -> EnrichedRecord {
        EnrichedRecord {
            record: Record::default(),
            name: NameParts::default(),
            email: String::new(),
            email_valid,
            phone: phone::normalize(raw_phone),
            address: AddressFields::default(),
            address_error: address_error.map(str::to_string),
        }
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let records = vec![enriched(false, "", Some("bad")), enriched(true, "5551234567", None)];
        assert_eq!(OutputFilter::default().apply(records).len(), 2);
    }

    #[test]
    fn test_only_valid_contacts() {
        let filter = OutputFilter {
            only_valid_contacts: true,
            ..Default::default()
        };
        assert!(filter.keep(&enriched(true, "555 123 4567", None)));
        assert!(!filter.keep(&enriched(true, "555 123 456", None)));
        assert!(!filter.keep(&enriched(false, "555 123 4567", None)));
    }

    #[test]
    fn test_skip_unparsed_addresses() {
        let filter = OutputFilter {
            skip_unparsed_addresses: true,
            ..Default::default()
        };
        assert!(!filter.keep(&enriched(true, "5551234567", Some("control character"))));
        assert!(filter.keep(&enriched(false, "", None)));
    }
}
