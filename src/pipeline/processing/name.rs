use serde::{Deserialize, Serialize};

/// A full name broken into its parts. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Split a full name on runs of whitespace.
///
/// A single token is treated as a last name, so `"Cher"` yields an empty
/// first name. With three or more tokens every interior token lands in the
/// middle name, joined by single spaces.
pub fn split(full_name: &str) -> NameParts {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => NameParts::default(),
        [last] => NameParts {
            last: (*last).to_string(),
            ..Default::default()
        },
        [first, last] => NameParts {
            first: (*first).to_string(),
            middle: String::new(),
            last: (*last).to_string(),
        },
        [first, middle @ .., last] => NameParts {
            first: (*first).to_string(),
            middle: middle.join(" "),
            last: (*last).to_string(),
        },
    }
}
