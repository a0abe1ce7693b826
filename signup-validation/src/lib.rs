//! Signup form validation
//!
//! Pure checks for the six signup fields, an aggregate pass over the whole
//! form that decides whether submission may proceed, and the live password
//! strength breakdown. Nothing here holds state or performs I/O; every call is
//! a fresh computation over the values passed in.
//!
//! # Examples
//!
//! ## Validating a single field
//!
//! ```
//! use signup_validation::{validate_field, FieldName, FieldValues};
//!
//! let values = FieldValues::new().with(FieldName::Age, "121");
//! let result = validate_field(FieldName::Age, &values);
//! assert_eq!(result.message(), Some("Enter a valid age (1 to 120)."));
//! ```
//!
//! ## Gating a submission
//!
//! ```
//! use signup_validation::{validate_all, FieldName, FieldValues};
//!
//! let values = FieldValues::new()
//!     .with(FieldName::Name, "Jane Doe")
//!     .with(FieldName::Age, "34")
//!     .with(FieldName::Mobile, "98765")
//!     .with(FieldName::Email, "jane@example.com")
//!     .with(FieldName::Password, "hunter2!x")
//!     .with(FieldName::ConfirmPassword, "hunter2!x");
//!
//! let outcome = validate_all(&values);
//! assert!(!outcome.all_valid());
//! assert_eq!(outcome.first_invalid(), Some(FieldName::Mobile));
//! ```
//!
//! ## Password checklist
//!
//! ```
//! use signup_validation::password_rule_status;
//!
//! let status = password_rule_status("abcd1234");
//! assert!(status.min_length && status.has_digit);
//! assert!(!status.has_special);
//! ```

mod errors;
mod field;
pub mod messages;
mod outcome;
mod pipe;
mod rules;
mod traits;
mod validators;

pub use errors::*;
pub use field::*;
pub use outcome::*;
pub use pipe::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;

use once_cell::sync::Lazy;

static STANDARD_RULES: Lazy<SignupRules> = Lazy::new(SignupRules::standard);

/// The signup form's rule set, shared process-wide.
pub fn standard_rules() -> &'static SignupRules {
    &STANDARD_RULES
}

/// Check one field against the signup rules.
pub fn validate_field(field: FieldName, values: &FieldValues) -> ValidationResult {
    STANDARD_RULES.validate_field(field, values)
}

/// Check every field against the signup rules.
pub fn validate_all(values: &FieldValues) -> FormValidationOutcome {
    STANDARD_RULES.validate_all(values)
}
