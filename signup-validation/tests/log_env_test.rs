//! The validator's debug logging honours `SIGNUP_DEBUG` with no setup call.
//!
//! Kept in its own test binary: the log config is read once per process.

use signup_validation::*;

#[test]
fn test_signup_debug_enables_validator_logging() {
    // SAFETY: the only test in this binary, nothing else reads the env
    unsafe {
        std::env::set_var("SIGNUP_DEBUG", "1");
    }

    let outcome = validate_all(&FieldValues::new());
    assert_eq!(outcome.first_invalid(), Some(FieldName::Name));

    assert!(signup_log::is_debug_enabled());
    assert_eq!(signup_log::current_level(), signup_log::Level::Debug);
}
