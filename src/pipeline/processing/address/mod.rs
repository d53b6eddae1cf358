//! Address decomposition.
//!
//! A tokenizer turns free-form address text into labelled tokens; the
//! classifier here re-buckets those labels into the five coarse output
//! fields. Labels outside the table are dropped.

pub mod lexicon;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use tokenizer::{AddressTokenizer, RuleTokenizer};

use crate::error::TokenizerError;

/// Semantic label attached to a token of address text.
///
/// The set mirrors the usaddress label vocabulary for the labels the
/// classifier cares about. Anything else is carried as `Other` and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressTag {
    AddressNumber,
    StreetNamePreDirectional,
    StreetName,
    StreetNamePostType,
    StreetNamePostDirectional,
    OccupancyType,
    OccupancyIdentifier,
    PlaceName,
    StateName,
    ZipCode,
    UspsBoxType,
    UspsBoxId,
    Other(String),
}

impl AddressTag {
    pub fn from_label(label: &str) -> Self {
        match label {
            "AddressNumber" => AddressTag::AddressNumber,
            "StreetNamePreDirectional" => AddressTag::StreetNamePreDirectional,
            "StreetName" => AddressTag::StreetName,
            "StreetNamePostType" => AddressTag::StreetNamePostType,
            "StreetNamePostDirectional" => AddressTag::StreetNamePostDirectional,
            "OccupancyType" => AddressTag::OccupancyType,
            "OccupancyIdentifier" => AddressTag::OccupancyIdentifier,
            "PlaceName" => AddressTag::PlaceName,
            "StateName" => AddressTag::StateName,
            "ZipCode" => AddressTag::ZipCode,
            "USPSBoxType" => AddressTag::UspsBoxType,
            "USPSBoxID" => AddressTag::UspsBoxId,
            other => AddressTag::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AddressTag::AddressNumber => "AddressNumber",
            AddressTag::StreetNamePreDirectional => "StreetNamePreDirectional",
            AddressTag::StreetName => "StreetName",
            AddressTag::StreetNamePostType => "StreetNamePostType",
            AddressTag::StreetNamePostDirectional => "StreetNamePostDirectional",
            AddressTag::OccupancyType => "OccupancyType",
            AddressTag::OccupancyIdentifier => "OccupancyIdentifier",
            AddressTag::PlaceName => "PlaceName",
            AddressTag::StateName => "StateName",
            AddressTag::ZipCode => "ZipCode",
            AddressTag::UspsBoxType => "USPSBoxType",
            AddressTag::UspsBoxId => "USPSBoxID",
            AddressTag::Other(label) => label,
        }
    }

    /// Output field this tag feeds, if any
    pub fn field(&self) -> Option<AddressField> {
        match self {
            AddressTag::AddressNumber | AddressTag::StreetName | AddressTag::StreetNamePostType => {
                Some(AddressField::Address1)
            }
            AddressTag::OccupancyType | AddressTag::OccupancyIdentifier => {
                Some(AddressField::Address2)
            }
            AddressTag::PlaceName => Some(AddressField::City),
            AddressTag::StateName => Some(AddressField::State),
            AddressTag::ZipCode => Some(AddressField::Zipcode),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Address1 = 0,
    Address2 = 1,
    City = 2,
    State = 3,
    Zipcode = 4,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressToken {
    pub text: String,
    pub tag: AddressTag,
}

impl AddressToken {
    pub fn new(text: impl Into<String>, tag: AddressTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// The five structured address fields. Empty when nothing was tagged for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Bucket tagged tokens into the output fields, keeping encounter order
/// within each field.
pub fn classify(tokens: &[AddressToken]) -> AddressFields {
    let mut buckets: [Vec<&str>; 5] = Default::default();

    for token in tokens {
        if let Some(field) = token.tag.field() {
            buckets[field as usize].push(token.text.as_str());
        }
    }

    let [address_1, address_2, city, state, zipcode] = buckets.map(|parts| parts.join(" "));
    AddressFields {
        address_1,
        address_2,
        city,
        state,
        zipcode,
    }
}

/// Join the present address lines into tokenizer input. Each present line
/// is prefixed with one space; absent lines contribute nothing.
pub fn assemble_address_text(lines: &[Option<String>]) -> String {
    lines.iter().flatten().fold(String::new(), |mut text, line| {
        text.push(' ');
        text.push_str(line);
        text
    })
}

/// Assemble, tokenize and classify the address lines of one row.
pub fn parse_address<T>(tokenizer: &T, lines: &[Option<String>]) -> Result<AddressFields, TokenizerError>
where
    T: AddressTokenizer + ?Sized,
{
    let text = assemble_address_text(lines);
    let tokens = tokenizer.tokenize(&text)?;
    Ok(classify(&tokens))
}
