// Signup - field validation and a headless controller for a signup form
//
// The validator is always available; the controller, settings and logger
// sit behind the `form`, `config` and `log` features.

// Re-export the validator
pub use signup_validation::*;

// Re-export optional crates
#[cfg(feature = "form")]
pub use signup_form;

#[cfg(feature = "config")]
pub use signup_config;

#[cfg(feature = "log")]
pub use signup_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldName,
        FieldValues,
        FormError,
        FormValidationOutcome,
        PasswordRuleStatus,
        Rule,
        SignupRules,
        Validate,
        ValidationErrors,
        ValidationPipe,
        ValidationResult,
        password_rule_status,
        validate_all,
        validate_field,
    };

    #[cfg(feature = "config")]
    pub use signup_config::FormSettings;

    #[cfg(feature = "form")]
    pub use signup_form::{FormController, FormHandle, FormSnapshot, SubmitOutcome};
}
