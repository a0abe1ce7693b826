//! Integration tests for common signup workflows.
//!
//! These tests drive the crates through the root `signup` re-exports the way
//! an application would.

use signup::prelude::*;
use signup::signup_config::SettingsBuilder;
use std::time::Duration;

fn jane() -> FieldValues {
    FieldValues::new()
        .with(FieldName::Name, "Jane Doe")
        .with(FieldName::Age, "28")
        .with(FieldName::Mobile, "9876543210")
        .with(FieldName::Email, "jane@example.com")
        .with(FieldName::Password, "abcd12#4")
        .with(FieldName::ConfirmPassword, "abcd12#4")
}

// =============================================================================
// Validator
// =============================================================================

#[test]
fn test_valid_signup_passes_every_rule() {
    let outcome = validate_all(&jane());
    assert!(outcome.all_valid());
    assert_eq!(outcome.first_invalid(), None);
    assert!(jane().validate().is_ok());
}

#[test]
fn test_empty_form_reports_required_messages_in_order() {
    let outcome = validate_all(&FieldValues::new());
    assert_eq!(outcome.first_invalid(), Some(FieldName::Name));
    assert_eq!(outcome.invalid_fields(), FieldName::ALL.to_vec());

    let errors = outcome.errors();
    assert_eq!(errors.len(), 6);
    assert!(errors.errors.iter().all(|e| e.constraint == Rule::Required));
    assert_eq!(
        errors.get(FieldName::ConfirmPassword).map(|e| e.message.as_str()),
        Some("Please confirm your password.")
    );
}

#[test]
fn test_confirmation_mismatch_is_the_only_error() {
    let values = jane().with(FieldName::ConfirmPassword, "abcd12#5");
    let outcome = validate_all(&values);
    assert_eq!(outcome.invalid_fields(), vec![FieldName::ConfirmPassword]);
    assert_eq!(
        outcome.result(FieldName::ConfirmPassword).rule(),
        Some(Rule::Mismatch)
    );
}

#[test]
fn test_password_checklist_tracks_each_rule() {
    let status = password_rule_status("abcdefgh");
    assert!(status.min_length);
    assert!(!status.has_digit);
    assert!(!status.has_special);
    assert!(password_rule_status("abcd12#4").all_met());
}

#[test]
fn test_json_body_round_trip_through_the_pipe() {
    let body = serde_json::json!({
        "name": "Jane Doe",
        "age": 28,
        "mobile": "98765",
        "email": "jane@example.com",
        "password": "abcd12#4",
        "confirmPassword": "abcd12#4",
    })
    .to_string();

    let err = ValidationPipe::check(body.as_bytes()).unwrap_err();
    let json = ValidationPipe::error_body(&err);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["errors"][0]["field"], "mobile");
    assert_eq!(json["errors"][0]["constraint"], "format");
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_settings_overrides_reach_the_controller() {
    let settings = SettingsBuilder::new()
        .with_prefix("SIGNUPWF")
        .set("reset_delay_ms", 250)
        .set("success_message", "Welcome aboard.")
        .build()
        .unwrap();
    assert_eq!(settings.reset_delay(), Duration::from_millis(250));

    let mut form = FormController::new(settings);
    for (field, value) in jane().iter() {
        form.input(field, value);
    }
    assert_eq!(form.submit(), SubmitOutcome::Accepted);
    assert_eq!(form.status().text, "Welcome aboard.");
}

#[test]
fn test_invalid_settings_are_rejected() {
    let result = SettingsBuilder::new()
        .with_prefix("SIGNUPWF")
        .set("success_message", "")
        .build();
    assert!(result.is_err());
}

// =============================================================================
// Form controller
// =============================================================================

#[test]
fn test_rejected_submit_focuses_first_invalid_field() {
    let mut form = FormController::new(FormSettings::default());
    for (field, value) in jane().iter() {
        form.input(field, value);
    }
    form.input(FieldName::Email, "jane@example");

    assert_eq!(
        form.submit(),
        SubmitOutcome::Rejected {
            focus: FieldName::Email
        }
    );

    let snapshot = form.snapshot();
    assert_eq!(snapshot.focused, Some(FieldName::Email));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["status"]["kind"], "bad");
    assert_eq!(json["fields"][3]["field"], "email");
    assert_eq!(json["fields"][3]["invalid"], true);
}

#[tokio::test(start_paused = true)]
async fn test_accepted_submit_resets_through_the_handle() {
    let form = FormController::new(FormSettings::default());
    let handle = FormHandle::new(form);
    for (field, value) in jane().iter() {
        handle.input(field, value);
    }

    let (outcome, task) = handle.submit();
    assert!(outcome.is_accepted());
    task.unwrap().await.unwrap();

    let snapshot = handle.snapshot();
    assert!(snapshot.fields.iter().all(|f| !f.view.invalid));
    assert_eq!(snapshot.focused, None);
    assert!(!snapshot.checklist.min_length);
}
