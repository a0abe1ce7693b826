// Format predicates for each field

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]{1,39}$").unwrap());

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Shortest password that satisfies the length rule.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Youngest accepted age.
pub const MIN_AGE: u8 = 1;

/// Oldest accepted age.
pub const MAX_AGE: u8 = 120;

/// Strip surrounding whitespace, including the byte order mark (U+FEFF)
/// that `str::trim` keeps.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// A letter followed by 1 to 39 letters or spaces.
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(trim_value(value))
}

/// A number with no fractional part between [`MIN_AGE`] and [`MAX_AGE`].
///
/// Any decimal spelling of an integer passes (`"42"`, `"42.0"`, `"4.2e1"`),
/// as do unsigned `0x`, `0o` and `0b` literals; `"12.5"` and non-numeric
/// text do not.
pub fn is_valid_age(value: &str) -> bool {
    match parse_number(trim_value(value)) {
        Some(n) => {
            n.is_finite() && n.fract() == 0.0 && n >= f64::from(MIN_AGE) && n <= f64::from(MAX_AGE)
        }
        None => false,
    }
}

/// Numeric text as a form would coerce it: decimal or exponent notation,
/// or a radix-prefixed integer. Signs are not allowed on prefixed forms.
fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let digits = &text[2..];
            if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return None;
            }
            // overflow still means "a number", just far out of range
            return match u64::from_str_radix(digits, radix) {
                Ok(n) => Some(n as f64),
                Err(e) if *e.kind() == std::num::IntErrorKind::PosOverflow => Some(f64::MAX),
                Err(_) => None,
            };
        }
    }

    text.parse::<f64>().ok()
}

/// Exactly ten ASCII digits.
pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_REGEX.is_match(trim_value(value))
}

/// `local@domain.tld` with a top-level part of two or more characters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(trim_value(value))
}

/// The three password strength checks, each reported on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRuleStatus {
    /// At least [`MIN_PASSWORD_LENGTH`] UTF-16 code units
    pub min_length: bool,
    /// Contains an ASCII digit
    pub has_digit: bool,
    /// Contains a character that is not an ASCII letter or digit
    pub has_special: bool,
}

impl PasswordRuleStatus {
    /// Evaluate the raw password, untrimmed.
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            has_digit: DIGIT_REGEX.is_match(password),
            has_special: SPECIAL_REGEX.is_match(password),
        }
    }

    pub fn all_met(&self) -> bool {
        self.min_length && self.has_digit && self.has_special
    }
}

/// Strength breakdown for the live checklist.
pub fn password_rule_status(password: &str) -> PasswordRuleStatus {
    PasswordRuleStatus::evaluate(password)
}
