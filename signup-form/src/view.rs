// Observable view state of the form

use serde::Serialize;
use signup_validation::{FieldName, PasswordRuleStatus, ValidationResult};

/// Error text and invalid marker shown for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub error: String,
    pub invalid: bool,
}

impl FieldView {
    /// Show a validation result: its message when invalid, nothing otherwise.
    pub fn apply(&mut self, result: ValidationResult) {
        match result.message() {
            Some(message) => {
                self.error = message.to_string();
                self.invalid = true;
            }
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.error.clear();
        self.invalid = false;
    }

    /// Value of the input's `aria-invalid` attribute.
    pub fn aria_invalid(&self) -> &'static str {
        if self.invalid { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Idle,
    Good,
    Bad,
}

/// Form-level status line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn good(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Good,
            text: text.into(),
        }
    }

    pub fn bad(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Bad,
            text: text.into(),
        }
    }

    /// Styling class for the status element; idle has none.
    pub fn css_class(&self) -> Option<&'static str> {
        match self.kind {
            StatusKind::Idle => None,
            StatusKind::Good => Some("good"),
            StatusKind::Bad => Some("bad"),
        }
    }
}

/// Whether a password input shows its characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// The input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Hidden => "password",
            Visibility::Shown => "text",
        }
    }

    /// Label of the toggle button: the action it performs next.
    pub fn button_label(self) -> &'static str {
        match self {
            Visibility::Hidden => "Show",
            Visibility::Shown => "Hide",
        }
    }

    /// The toggle button's `aria-pressed` state.
    pub fn aria_pressed(self) -> bool {
        self == Visibility::Shown
    }
}

/// Serializable picture of everything a host renders. Field values are left
/// out so passwords never leave the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub fields: Vec<FieldSnapshot>,
    pub status: Status,
    pub checklist: PasswordRuleStatus,
    pub focused: Option<FieldName>,
    pub password_visibility: Visibility,
    pub confirm_visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub field: FieldName,
    #[serde(flatten)]
    pub view: FieldView,
}
