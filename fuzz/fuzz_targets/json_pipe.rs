//! Fuzz target for the JSON validation pipe.
//!
//! Arbitrary bytes must never panic the parser, and a body that parses must
//! validate the same way through `check`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use signup_validation::*;

fuzz_target!(|data: &[u8]| {
    let parsed = ValidationPipe::parse(data);
    let checked = ValidationPipe::check(data);

    match parsed {
        Ok(values) => {
            let outcome = validate_all(&values);
            assert_eq!(outcome.all_valid(), checked.is_ok());
            if let Err(err) = checked {
                let body = ValidationPipe::error_body(&err);
                let _ = serde_json::to_string(&body);
            }
        }
        Err(_) => assert!(checked.is_err()),
    }

    let _ = ValidationPipe::parse_form(data);
});
