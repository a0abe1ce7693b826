// Fixed user-facing messages, one pair per field

use crate::FieldName;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_INVALID: &str = "Enter a valid name (letters & spaces, min 2 characters).";

pub const AGE_REQUIRED: &str = "Age is required.";
pub const AGE_INVALID: &str = "Enter a valid age (1 to 120).";

pub const MOBILE_REQUIRED: &str = "Mobile number is required.";
pub const MOBILE_INVALID: &str = "Enter a 10-digit mobile number.";

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";

pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_INVALID: &str =
    "Password must be 8+ characters and include 1 number and 1 special character.";

pub const CONFIRM_REQUIRED: &str = "Please confirm your password.";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match.";

/// Message shown when the field is left empty.
pub fn required(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => NAME_REQUIRED,
        FieldName::Age => AGE_REQUIRED,
        FieldName::Mobile => MOBILE_REQUIRED,
        FieldName::Email => EMAIL_REQUIRED,
        FieldName::Password => PASSWORD_REQUIRED,
        FieldName::ConfirmPassword => CONFIRM_REQUIRED,
    }
}

/// Message shown when the field has a value that fails its rule.
pub fn invalid(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => NAME_INVALID,
        FieldName::Age => AGE_INVALID,
        FieldName::Mobile => MOBILE_INVALID,
        FieldName::Email => EMAIL_INVALID,
        FieldName::Password => PASSWORD_INVALID,
        FieldName::ConfirmPassword => CONFIRM_MISMATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_messages_are_distinct() {
        let all: HashSet<&str> = FieldName::ALL
            .iter()
            .flat_map(|&f| [required(f), invalid(f)])
            .collect();
        assert_eq!(all.len(), 12);
    }
}
