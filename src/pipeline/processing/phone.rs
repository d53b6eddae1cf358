use serde::{Deserialize, Serialize};

/// Number of digits in a North American phone number
pub const PHONE_DIGITS: usize = 10;

/// Result of normalizing a raw phone cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Every ASCII digit of the input, in order
    pub digits: String,
    pub valid: bool,
    /// `(DDD) DDD-DDDD` when valid, otherwise the bare digits
    pub display: String,
}

pub fn normalize(raw: &str) -> PhoneNumber {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let valid = digits.len() == PHONE_DIGITS;

    let display = if valid {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits.clone()
    };

    PhoneNumber {
        digits,
        valid,
        display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits_are_formatted() {
        let phone = normalize("555.123.4567");
        assert_eq!(phone.digits, "5551234567");
        assert!(phone.valid);
        assert_eq!(phone.display, "(555) 123-4567");
    }

    #[test]
    fn test_extension_makes_number_invalid() {
        let phone = normalize("(555) 123-4567x9");
        assert_eq!(phone.digits, "55512345679");
        assert!(!phone.valid);
        assert_eq!(phone.display, "55512345679");
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(normalize(""), PhoneNumber::default());
        assert_eq!(normalize("call me"), PhoneNumber::default());
    }

    #[test]
    fn test_validity_tracks_digit_count() {
        let cases = [
            ("123", false),
            ("+1 555 123 4567", false),
            ("555-123-456", false),
            ("555 123 4567", true),
            ("tel:5551234567;", true),
        ];
        for (raw, expected) in cases {
            let phone = normalize(raw);
            let count = raw.chars().filter(char::is_ascii_digit).count();
            assert_eq!(phone.valid, expected, "input {raw:?}");
            assert_eq!(phone.valid, count == PHONE_DIGITS, "input {raw:?}");
        }
    }

    #[test]
    fn test_display_round_trips_to_digits() {
        let phone = normalize("555 867 5309");
        let stripped: String = phone.display.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(stripped, phone.digits);
    }

    #[test]
    fn test_normalizing_display_is_idempotent() {
        let first = normalize("555/867/5309");
        let second = normalize(&first.display);
        assert_eq!(first, second);
    }
}
