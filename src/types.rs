use serde::{Deserialize, Serialize};

use crate::constants::{
    ADDRESS_LINE_COUNT, EMAIL_COLUMN, FIRST_ADDRESS_COLUMN, NAME_COLUMN, PHONE_COLUMN,
};
use crate::pipeline::processing::address::AddressFields;
use crate::pipeline::processing::name::NameParts;
use crate::pipeline::processing::phone::PhoneNumber;

/// One raw row of the contact table. `None` marks a cell with no data,
/// which is not the same thing as a cell holding an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Address 1, Address 2, Address 3, overflow
    pub address_lines: [Option<String>; ADDRESS_LINE_COUNT],
}

impl Record {
    /// Build a record from positional cells. Missing trailing cells are
    /// absent and anything past the seventh cell is ignored.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut record = Record::default();
        for (idx, cell) in cells.into_iter().enumerate() {
            match idx {
                NAME_COLUMN => record.name = cell,
                EMAIL_COLUMN => record.email = cell,
                PHONE_COLUMN => record.phone = cell,
                i if i >= FIRST_ADDRESS_COLUMN && i < FIRST_ADDRESS_COLUMN + ADDRESS_LINE_COUNT => {
                    record.address_lines[i - FIRST_ADDRESS_COLUMN] = cell;
                }
                _ => break,
            }
        }
        record
    }
}

/// A record after every field has been normalized. Built fresh from a
/// `Record`; nothing in here is ever absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The row as it was read
    pub record: Record,
    pub name: NameParts,
    /// Email text as written to the output, absent collapses to ""
    pub email: String,
    pub email_valid: bool,
    pub phone: PhoneNumber,
    pub address: AddressFields,
    /// Tokenizer failure for this row, if any. Address fields are empty when set.
    pub address_error: Option<String>,
}

impl EnrichedRecord {
    pub fn is_valid_contact(&self) -> bool {
        self.email_valid && self.phone.valid
    }
}

/// Flat view of an `EnrichedRecord` in output column order.
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    pub first_name: &'a str,
    pub middle_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub email_valid: bool,
    pub phone: &'a str,
    pub phone_valid: bool,
    pub address_1: &'a str,
    pub address_2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zipcode: &'a str,
}

impl<'a> From<&'a EnrichedRecord> for OutputRow<'a> {
    fn from(enriched: &'a EnrichedRecord) -> Self {
        Self {
            first_name: &enriched.name.first,
            middle_name: &enriched.name.middle,
            last_name: &enriched.name.last,
            email: &enriched.email,
            email_valid: enriched.email_valid,
            phone: &enriched.phone.display,
            phone_valid: enriched.phone.valid,
            address_1: &enriched.address.address_1,
            address_2: &enriched.address.address_2,
            city: &enriched.address.city,
            state: &enriched.address.state,
            zipcode: &enriched.address.zipcode,
        }
    }
}
