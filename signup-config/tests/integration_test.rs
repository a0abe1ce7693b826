//! Integration tests for signup-config

use signup_config::*;
use std::env;
use std::io::Write;

fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_toml_file() {
    let file = write_file(".toml", "reset_delay_ms = 1200\nsuccess_message = \"Thanks!\"\n");

    let settings = FormSettings::builder().add_file(file.path()).unwrap().build().unwrap();
    assert_eq!(settings.reset_delay_ms, 1200);
    assert_eq!(settings.success_message, "Thanks!");
    assert_eq!(settings.failure_message, FormSettings::default().failure_message);
}

#[test]
fn test_json_file_then_override() {
    let file = write_file(".json", r#"{"reset_delay_ms": 300, "failure_message": "Nope"}"#);

    let settings = FormSettings::builder()
        .add_file(file.path())
        .unwrap()
        .set("reset_delay_ms", 0)
        .build()
        .unwrap();
    assert_eq!(settings.reset_delay_ms, 0);
    assert_eq!(settings.failure_message, "Nope");
}

#[test]
fn test_env_file_with_prefixed_keys() {
    let file = write_file(".env", "SIGNUP_RESET_DELAY_MS=42\nSIGNUP_SUCCESS_MESSAGE='Saved'\n");

    let settings = FormSettings::builder().add_file(file.path()).unwrap().build().unwrap();
    assert_eq!(settings.reset_delay_ms, 42);
    assert_eq!(settings.success_message, "Saved");
}

#[test]
fn test_unsupported_extension() {
    let file = write_file(".yaml", "reset_delay_ms: 1\n");
    assert!(matches!(
        FormSettings::builder().add_file(file.path()),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = FormSettings::builder()
        .add_file_with_format("/nonexistent/signup.toml", FileFormat::Toml)
        .build();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_environment_overrides_file() {
    let file = write_file(".toml", "reset_delay_ms = 900\n");

    unsafe {
        env::set_var("SIGNUPIT_RESET_DELAY_MS", "25");
    }

    let settings = FormSettings::builder()
        .with_prefix("SIGNUPIT")
        .add_file(file.path())
        .unwrap()
        .load_env()
        .build()
        .unwrap();
    assert_eq!(settings.reset_delay_ms, 25);

    unsafe {
        env::remove_var("SIGNUPIT_RESET_DELAY_MS");
    }
}

#[test]
fn test_dotenv_file() {
    let file = write_file(".env", "SIGNUPDOT_FAILURE_MESSAGE=\"Fix it\"\n");

    let settings = FormSettings::builder()
        .with_prefix("SIGNUPDOT")
        .load_dotenv(Some(file.path().to_path_buf()))
        .build()
        .unwrap();
    assert_eq!(settings.failure_message, "Fix it");

    unsafe {
        env::remove_var("SIGNUPDOT_FAILURE_MESSAGE");
    }
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("bad table".to_string());
    assert!(err.to_string().contains("bad table"));
}
