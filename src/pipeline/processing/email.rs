use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Local part: dot-atom or quoted string. Character classes are lowercase
/// only, so mixed-case addresses do not validate.
const LOCAL_PART: &str = r##"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"##;

/// Dotted domain name or a bracketed IPv4 / tagged address literal.
const DOMAIN: &str = r"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])";

static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{LOCAL_PART}@{DOMAIN})")).expect("email grammar is a valid regex")
});

static FULL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{LOCAL_PART}@{DOMAIN})$")).expect("email grammar is a valid regex")
});

/// How much of the input the grammar has to cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailMatchMode {
    /// Anchored at the start only; anything after a valid address is accepted
    #[default]
    Prefix,
    /// The whole input must be a single address
    Full,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator {
    mode: EmailMatchMode,
}

impl EmailValidator {
    pub fn new(mode: EmailMatchMode) -> Self {
        Self { mode }
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        match self.mode {
            EmailMatchMode::Prefix => PREFIX_RE.is_match(raw),
            EmailMatchMode::Full => FULL_RE.is_match(raw),
        }
    }
}
