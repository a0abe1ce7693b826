// Validation pipe for JSON form payloads

use crate::{FieldName, FieldValues, FormError, Validate};
use serde_json::Value;
use std::collections::HashMap;

/// Turns a JSON body into a validated [`FieldValues`].
pub struct ValidationPipe;

impl ValidationPipe {
    /// Parse a camelCase JSON object carrying all six fields.
    ///
    /// String values are taken as-is and numbers are converted to their
    /// decimal text, so `{"age": 30}` and `{"age": "30"}` are equivalent.
    pub fn parse(body: &[u8]) -> Result<FieldValues, FormError> {
        let parsed: Value =
            serde_json::from_slice(body).map_err(|e| FormError::InvalidJson(e.to_string()))?;

        let object = parsed
            .as_object()
            .ok_or_else(|| FormError::InvalidJson("expected a JSON object".to_string()))?;

        let mut values = FieldValues::new();
        for field in FieldName::ALL {
            let text = match object.get(field.as_str()) {
                None | Some(Value::Null) => return Err(FormError::MissingField(field)),
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(other) => {
                    return Err(FormError::InvalidValue {
                        field,
                        found: json_kind(other).to_string(),
                    });
                }
            };
            values.set(field, text);
        }

        Ok(values)
    }

    /// Parse an `application/x-www-form-urlencoded` body. Every field must
    /// appear; a repeated key keeps its last value.
    pub fn parse_form(body: &[u8]) -> Result<FieldValues, FormError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| FormError::InvalidForm(e.to_string()))?;

        FieldValues::from_map(&pairs.into_iter().collect::<HashMap<_, _>>())
    }

    /// Parse and validate; a failing form becomes [`FormError::Rejected`].
    pub fn check(body: &[u8]) -> Result<FieldValues, FormError> {
        let values = Self::parse(body)?;
        values.validate().map_err(FormError::Rejected)?;
        Ok(values)
    }

    /// JSON body describing a failure, for whatever transport the host uses.
    pub fn error_body(error: &FormError) -> Value {
        match error {
            FormError::Rejected(errors) => errors.to_json(),
            other => serde_json::json!({ "error": other.to_string() }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate a value implementing [`Validate`], returning
/// [`FormError::Rejected`] from the enclosing function on failure.
#[macro_export]
macro_rules! validate {
    ($values:expr) => {{
        $crate::Validate::validate(&$values).map_err($crate::FormError::Rejected)?
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "name": "Jane Doe",
        "age": 30,
        "mobile": "9876543210",
        "email": "jane@example.com",
        "password": "s3cret!pw",
        "confirmPassword": "s3cret!pw"
    }"#;

    #[test]
    fn test_parse_accepts_numeric_age() {
        let values = ValidationPipe::parse(VALID.as_bytes()).unwrap();
        assert_eq!(values.age, "30");
        assert_eq!(values.confirm_password, "s3cret!pw");
    }

    #[test]
    fn test_check_valid_body() {
        assert!(ValidationPipe::check(VALID.as_bytes()).is_ok());
    }

    #[test]
    fn test_missing_field_is_contract_error() {
        let body = r#"{"name": "Jane"}"#;
        assert!(matches!(
            ValidationPipe::parse(body.as_bytes()),
            Err(FormError::MissingField(FieldName::Age))
        ));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let body = VALID.replace("\"9876543210\"", "null");
        assert!(matches!(
            ValidationPipe::parse(body.as_bytes()),
            Err(FormError::MissingField(FieldName::Mobile))
        ));
    }

    #[test]
    fn test_wrong_value_type() {
        let body = VALID.replace("\"Jane Doe\"", "true");
        assert!(matches!(
            ValidationPipe::parse(body.as_bytes()),
            Err(FormError::InvalidValue { field: FieldName::Name, .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ValidationPipe::parse(b"{not json"),
            Err(FormError::InvalidJson(_))
        ));
        assert!(matches!(
            ValidationPipe::parse(b"[]"),
            Err(FormError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_form_body() {
        let body = "name=Jane+Doe&age=30&mobile=9876543210&email=jane%40example.com\
                    &password=s3cret%21pw&confirmPassword=s3cret%21pw";
        let values = ValidationPipe::parse_form(body.as_bytes()).unwrap();
        assert_eq!(values.name, "Jane Doe");
        assert_eq!(values.email, "jane@example.com");
        assert_eq!(values.confirm_password, "s3cret!pw");
        assert!(crate::validate_all(&values).all_valid());
    }

    #[test]
    fn test_parse_form_missing_field() {
        assert!(matches!(
            ValidationPipe::parse_form(b"name=Jane&age=30"),
            Err(FormError::MissingField(FieldName::Mobile))
        ));
    }

    #[test]
    fn test_rejected_error_body() {
        let body = VALID.replace("\"9876543210\"", "\"12345\"");
        let err = ValidationPipe::check(body.as_bytes()).unwrap_err();
        let json = ValidationPipe::error_body(&err);
        assert_eq!(json["errors"][0]["field"], "mobile");
        assert_eq!(json["errors"][0]["message"], "Enter a 10-digit mobile number.");
    }

    #[test]
    fn test_validate_macro() {
        fn submit(values: FieldValues) -> Result<(), FormError> {
            crate::validate!(values);
            Ok(())
        }

        assert!(matches!(
            submit(FieldValues::new()),
            Err(FormError::Rejected(errors)) if errors.len() == 6
        ));
    }
}
