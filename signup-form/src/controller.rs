// Form controller: owns the form's mutable state and drives the validator

use crate::view::{FieldSnapshot, FieldView, FormSnapshot, Status, Visibility};
use parking_lot::Mutex;
use signup_config::FormSettings;
use signup_log::{debug, info};
use signup_validation::{
    password_rule_status, standard_rules, FieldName, FieldValues, PasswordRuleStatus,
    SignupRules,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; a reset follows after the configured delay.
    Accepted,
    /// At least one field failed; focus moved to `focus`.
    Rejected { focus: FieldName },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Headless signup form.
///
/// Input events re-validate only the field that changed; submit validates
/// everything and either accepts the form or points at the first bad field.
#[derive(Debug, Clone)]
pub struct FormController {
    settings: FormSettings,
    rules: SignupRules,
    values: FieldValues,
    views: [FieldView; 6],
    status: Status,
    checklist: PasswordRuleStatus,
    password_visibility: Visibility,
    confirm_visibility: Visibility,
    focused: Option<FieldName>,
}

impl FormController {
    pub fn new(settings: FormSettings) -> Self {
        Self::with_rules(settings, standard_rules().clone())
    }

    pub fn with_rules(settings: FormSettings, rules: SignupRules) -> Self {
        Self {
            settings,
            rules,
            values: FieldValues::new(),
            views: Default::default(),
            status: Status::default(),
            checklist: password_rule_status(""),
            password_visibility: Visibility::Hidden,
            confirm_visibility: Visibility::Hidden,
            focused: None,
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn view(&self, field: FieldName) -> &FieldView {
        &self.views[field.index()]
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn checklist(&self) -> PasswordRuleStatus {
        self.checklist
    }

    /// Field that currently has focus, if the controller moved it.
    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    /// Visibility of a password input; `None` for other fields.
    pub fn visibility(&self, field: FieldName) -> Option<Visibility> {
        match field {
            FieldName::Password => Some(self.password_visibility),
            FieldName::ConfirmPassword => Some(self.confirm_visibility),
            _ => None,
        }
    }

    /// Flip a password input between hidden and shown.
    pub fn toggle_visibility(&mut self, field: FieldName) -> Option<Visibility> {
        let slot = match field {
            FieldName::Password => &mut self.password_visibility,
            FieldName::ConfirmPassword => &mut self.confirm_visibility,
            _ => return None,
        };
        *slot = slot.toggled();
        Some(*slot)
    }

    /// A field's value changed.
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
        self.refresh(field);

        if field == FieldName::Password {
            self.checklist = password_rule_status(&self.values.password);
            if !self.values.confirm_password.is_empty() {
                self.refresh(FieldName::ConfirmPassword);
            }
        }
    }

    /// Validate the whole form and update every field's view.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.checklist = password_rule_status(&self.values.password);
        let outcome = self.rules.validate_all(&self.values);

        for (field, result) in outcome.iter() {
            self.views[field.index()].apply(result);
        }

        match outcome.first_invalid() {
            Some(focus) => {
                self.status = Status::bad(self.settings.failure_message.as_str());
                self.focused = Some(focus);
                debug!(
                    target: "signup::form",
                    "submission rejected, {} invalid field(s), focus {}",
                    outcome.invalid_fields().len(),
                    focus
                );
                SubmitOutcome::Rejected { focus }
            }
            None => {
                self.status = Status::good(self.settings.success_message.as_str());
                info!(target: "signup::form", "submission accepted");
                SubmitOutcome::Accepted
            }
        }
    }

    /// Clear values, errors, status and focus. Visibility toggles keep
    /// their state.
    pub fn reset(&mut self) {
        self.values = FieldValues::new();
        self.views.iter_mut().for_each(FieldView::clear);
        self.status = Status::default();
        self.focused = None;
        self.checklist = password_rule_status(&self.values.password);
        debug!(target: "signup::form", "form reset");
    }

    /// Submit and, when accepted, reset after the configured delay.
    /// A rejected submit returns immediately.
    pub async fn submit_and_reset(&mut self) -> SubmitOutcome {
        let outcome = self.submit();
        if outcome.is_accepted() {
            tokio::time::sleep(self.settings.reset_delay()).await;
            self.reset();
        }
        outcome
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: FieldName::ALL
                .into_iter()
                .map(|field| FieldSnapshot {
                    field,
                    view: self.view(field).clone(),
                })
                .collect(),
            status: self.status.clone(),
            checklist: self.checklist,
            focused: self.focused,
            password_visibility: self.password_visibility,
            confirm_visibility: self.confirm_visibility,
        }
    }

    fn refresh(&mut self, field: FieldName) {
        let result = self.rules.validate_field(field, &self.values);
        self.views[field.index()].apply(result);
    }
}

/// Shared controller for hosts that keep feeding input while a reset is
/// pending.
#[derive(Debug, Clone)]
pub struct FormHandle {
    inner: Arc<Mutex<FormController>>,
}

impl FormHandle {
    pub fn new(controller: FormController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run a closure against the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> R {
        let mut form = self.inner.lock();
        f(&mut *form)
    }

    pub fn input(&self, field: FieldName, value: impl Into<String>) {
        self.inner.lock().input(field, value);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.inner.lock().snapshot()
    }

    /// Submit; an accepted form gets a reset task on the tokio timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self) -> (SubmitOutcome, Option<JoinHandle<()>>) {
        let (outcome, delay) = {
            let mut form = self.inner.lock();
            (form.submit(), form.settings().reset_delay())
        };

        if !outcome.is_accepted() {
            return (outcome, None);
        }

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            inner.lock().reset();
        });
        (outcome, Some(task))
    }
}
