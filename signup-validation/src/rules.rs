// Per-field rule chains and the signup rule set

use crate::validators::{is_valid_age, is_valid_email, is_valid_mobile, is_valid_name, trim_value};
use crate::{
    messages, password_rule_status, FieldName, FieldValues, FormValidationOutcome,
    ValidationError,
};
use signup_log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

type CheckFn = Arc<dyn Fn(&str, &FieldValues) -> bool + Send + Sync>;

/// Kind of rule that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The field was left empty
    Required,
    /// The value does not have the expected shape
    Format,
    /// The value must equal another field and does not
    Mismatch,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Format => "format",
            Rule::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { rule: Rule, message: &'static str },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Error text to display, `None` when valid.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message, .. } => Some(*message),
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { rule, .. } => Some(*rule),
        }
    }

    /// Attach the field name to an invalid result.
    pub fn to_error(&self, field: FieldName) -> Option<ValidationError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { rule, message } => {
                Some(ValidationError::new(field, *rule, *message))
            }
        }
    }
}

#[derive(Clone)]
struct Step {
    rule: Rule,
    message: &'static str,
    check: CheckFn,
}

/// Ordered checks for one field. The first failing check decides the result.
#[derive(Clone)]
pub struct FieldRules {
    field: FieldName,
    trim: bool,
    steps: Vec<Step>,
}

impl FieldRules {
    /// Empty chain; trimming follows [`FieldName::is_trimmed`].
    pub fn for_field(field: FieldName) -> Self {
        Self {
            field,
            trim: field.is_trimmed(),
            steps: Vec::new(),
        }
    }

    /// Evaluate the value exactly as entered.
    pub fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }

    /// Reject an empty value with `message`.
    pub fn required(self, message: &'static str) -> Self {
        self.check(Rule::Required, message, |value, _| !value.is_empty())
    }

    /// Append a check. It receives the (possibly trimmed) value and the
    /// whole snapshot, for rules that compare against other fields.
    pub fn check<F>(mut self, rule: Rule, message: &'static str, check: F) -> Self
    where
        F: Fn(&str, &FieldValues) -> bool + Send + Sync + 'static,
    {
        self.steps.push(Step {
            rule,
            message,
            check: Arc::new(check),
        });
        self
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        let raw = values.get(self.field);
        let value = if self.trim { trim_value(raw) } else { raw };

        self.steps
            .iter()
            .find(|step| !(step.check)(value, values))
            .map_or(ValidationResult::Valid, |step| ValidationResult::Invalid {
                rule: step.rule,
                message: step.message,
            })
    }
}

/// Rule chains for the whole form.
///
/// Fields without a chain always validate.
#[derive(Clone, Default)]
pub struct SignupRules {
    fields: BTreeMap<FieldName, FieldRules>,
}

impl SignupRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The signup form's rules.
    pub fn standard() -> Self {
        Self::new()
            .field(
                FieldRules::for_field(FieldName::Name)
                    .required(messages::NAME_REQUIRED)
                    .check(Rule::Format, messages::NAME_INVALID, |v, _| is_valid_name(v)),
            )
            .field(
                FieldRules::for_field(FieldName::Age)
                    .required(messages::AGE_REQUIRED)
                    .check(Rule::Format, messages::AGE_INVALID, |v, _| is_valid_age(v)),
            )
            .field(
                FieldRules::for_field(FieldName::Mobile)
                    .required(messages::MOBILE_REQUIRED)
                    .check(Rule::Format, messages::MOBILE_INVALID, |v, _| {
                        is_valid_mobile(v)
                    }),
            )
            .field(
                FieldRules::for_field(FieldName::Email)
                    .required(messages::EMAIL_REQUIRED)
                    .check(Rule::Format, messages::EMAIL_INVALID, |v, _| is_valid_email(v)),
            )
            .field(
                FieldRules::for_field(FieldName::Password)
                    .required(messages::PASSWORD_REQUIRED)
                    .check(Rule::Format, messages::PASSWORD_INVALID, |v, _| {
                        password_rule_status(v).all_met()
                    }),
            )
            .field(
                FieldRules::for_field(FieldName::ConfirmPassword)
                    .required(messages::CONFIRM_REQUIRED)
                    .check(Rule::Mismatch, messages::CONFIRM_MISMATCH, |v, values| {
                        v == values.password
                    }),
            )
    }

    /// Install the chain for a field, replacing any earlier one.
    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.insert(rules.field(), rules);
        self
    }

    pub fn rules_for(&self, field: FieldName) -> Option<&FieldRules> {
        self.fields.get(&field)
    }

    pub fn validate_field(&self, field: FieldName, values: &FieldValues) -> ValidationResult {
        let result = self
            .rules_for(field)
            .map_or(ValidationResult::Valid, |rules| rules.validate(values));

        if let Some(rule) = result.rule() {
            debug!(target: "signup::validation", "{} rejected by {} rule", field, rule);
        }
        result
    }

    /// Validate every field and find the first invalid one in form order.
    pub fn validate_all(&self, values: &FieldValues) -> FormValidationOutcome {
        let outcome = FormValidationOutcome::from_results(
            FieldName::ALL.map(|field| self.validate_field(field, values)),
        );

        debug!(
            target: "signup::validation",
            "form validated: all_valid={} first_invalid={:?}",
            outcome.all_valid(),
            outcome.first_invalid()
        );
        outcome
    }
}

impl fmt::Debug for SignupRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRules")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
