//! Fuzz target for whole-form validation.
//!
//! Any six strings must validate without panicking, give the same outcome on
//! a second run, and agree with the per-field entry point.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use signup_validation::*;

#[derive(Debug, Arbitrary)]
struct FuzzForm {
    name: String,
    age: String,
    mobile: String,
    email: String,
    password: String,
    confirm_password: String,
}

fuzz_target!(|data: FuzzForm| {
    let values = FieldValues::new()
        .with(FieldName::Name, data.name)
        .with(FieldName::Age, data.age)
        .with(FieldName::Mobile, data.mobile)
        .with(FieldName::Email, data.email)
        .with(FieldName::Password, data.password)
        .with(FieldName::ConfirmPassword, data.confirm_password);

    let first = validate_all(&values);
    let second = validate_all(&values);
    assert_eq!(first, second);

    for field in FieldName::ALL {
        assert_eq!(first.result(field), validate_field(field, &values));
    }

    assert_eq!(first.first_invalid(), first.invalid_fields().first().copied());
    assert_eq!(first.all_valid(), values.validate().is_ok());

    let status = password_rule_status(&values.password);
    assert_eq!(status, password_rule_status(&values.password));
});
