//! Word lists used by the rule tokenizer. Lookups take a token already
//! passed through [`fold`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());

static HOUSE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:[A-Za-z]|-\d+|-[A-Za-z]|/\d+)?$").unwrap());

static STREET_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aly", "alley", "ave", "av", "avenue", "blvd", "boulevard", "cir", "circle", "ct",
        "court", "cv", "cove", "dr", "drive", "expy", "expressway", "fwy", "freeway", "hwy",
        "highway", "ln", "lane", "loop", "pkwy", "parkway", "pl", "place", "plz", "plaza", "rd",
        "road", "row", "sq", "square", "st", "street", "ter", "terrace", "trl", "trail", "way",
        "xing", "crossing",
    ]
    .into_iter()
    .collect()
});

static DIRECTIONALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "n", "s", "e", "w", "ne", "nw", "se", "sw", "north", "south", "east", "west",
        "northeast", "northwest", "southeast", "southwest",
    ]
    .into_iter()
    .collect()
});

static OCCUPANCY_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "apt", "apartment", "bldg", "building", "dept", "department", "fl", "floor", "lot",
        "ofc", "office", "ph", "penthouse", "rm", "room", "spc", "space", "ste", "suite", "trlr",
        "trailer", "unit",
    ]
    .into_iter()
    .collect()
});

/// USPS abbreviations for states, DC and territories
static STATE_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
        "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
        "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
        "VA", "WA", "WV", "WI", "WY", "DC", "PR", "GU", "VI", "AS", "MP",
    ]
    .into_iter()
    .collect()
});

static STATE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
        "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa",
        "kansas", "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan",
        "minnesota", "mississippi", "missouri", "montana", "nebraska", "nevada",
        "new hampshire", "new jersey", "new mexico", "new york", "north carolina",
        "north dakota", "ohio", "oklahoma", "oregon", "pennsylvania", "rhode island",
        "south carolina", "south dakota", "tennessee", "texas", "utah", "vermont", "virginia",
        "washington", "west virginia", "wisconsin", "wyoming", "district of columbia",
        "puerto rico", "guam",
    ]
    .into_iter()
    .collect()
});

/// Lowercase and drop periods, so `"St."` and `"P.O."` look up as `"st"` and `"po"`.
pub fn fold(token: &str) -> String {
    token.chars().filter(|c| *c != '.').flat_map(char::to_lowercase).collect()
}

pub fn is_zip_code(token: &str) -> bool {
    ZIP_RE.is_match(token)
}

pub fn is_house_number(token: &str) -> bool {
    HOUSE_NUMBER_RE.is_match(token)
}

pub fn is_street_suffix(token: &str) -> bool {
    STREET_SUFFIXES.contains(fold(token).as_str())
}

pub fn is_directional(token: &str) -> bool {
    DIRECTIONALS.contains(fold(token).as_str())
}

pub fn is_occupancy_type(token: &str) -> bool {
    OCCUPANCY_TYPES.contains(fold(token).as_str())
}

/// Two-letter codes must be written in capitals; `"Ct"` is a street suffix,
/// `"CT"` is Connecticut.
pub fn is_state_code(token: &str) -> bool {
    STATE_CODES.contains(token.trim_end_matches('.'))
}

/// Full state name, possibly spanning several words joined by single spaces
pub fn is_state_name(words: &str) -> bool {
    STATE_NAMES.contains(fold(words).as_str())
}

/// Longest run of words a state name can span
pub const MAX_STATE_WORDS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_periods() {
        assert_eq!(fold("St."), "st");
        assert_eq!(fold("P.O."), "po");
    }

    #[test]
    fn test_zip_codes() {
        assert!(is_zip_code("62704"));
        assert!(is_zip_code("62704-1234"));
        assert!(!is_zip_code("6270"));
        assert!(!is_zip_code("627041"));
    }

    #[test]
    fn test_house_numbers() {
        for n in ["1", "100", "12B", "221-B", "10-12", "1/2"] {
            assert!(is_house_number(n), "{n}");
        }
        assert!(!is_house_number("Main"));
        assert!(!is_house_number("4th"));
    }

    #[test]
    fn test_state_codes_are_case_sensitive() {
        assert!(is_state_code("CT"));
        assert!(!is_state_code("Ct"));
        assert!(is_state_name("New York"));
        assert!(is_state_name("district of columbia"));
    }
}
