//! Form view-models.
//!
//! A form view owns one [`FormState`]: the current value of every field, the
//! error message currently shown under each field, and where each field sits
//! in its validation lifecycle:
//!
//! ```text
//! Untouched ──blur──▶ Valid | Invalid(reason)
//! Invalid ──input──▶ Pending   (error cleared, nothing re-validated)
//! Pending ──blur───▶ Valid | Invalid(reason)
//! Untouched | Pending | Valid ──show_error──▶ Flagged
//! ```
//!
//! Fields outside the form's [`RuleSet`] are ignored.
//!
//! Submitting re-validates every field at once. While a submit is in flight
//! (between [`SubmitOutcome::Success`] and `finish_submit`) further submits
//! are rejected with [`SubmitOutcome::AlreadySubmitting`].

mod login;
mod register;

use std::collections::BTreeMap;

use crate::messages::Locale;
use crate::validation::{FieldName, FieldValues, Reason, RuleSet, ValidationError};

pub use login::{LoginForm, LoginSuccess};
pub use register::{RegisterForm, RegistrationSuccess};

/// Where a field sits in its validation lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldPhase {
    /// Never validated
    #[default]
    Untouched,
    /// Edited since the last validation
    Pending,
    Valid,
    Invalid(Reason),
    /// Marked invalid through [`FormState::show_error`] with caller text
    Flagged,
}

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// Every check passed; the form is now submitting
    Success(T),
    /// At least one check failed; nothing was submitted
    ValidationFailed(Vec<ValidationError>),
    /// A previous submit has not finished yet
    AlreadySubmitting,
}

impl<T> SubmitOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }

    /// Failures that must be presented as a blocking notice.
    pub fn blocking_errors(&self) -> Vec<&ValidationError> {
        match self {
            SubmitOutcome::ValidationFailed(errors) => {
                errors.iter().filter(|e| e.is_blocking()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Values, visible errors and lifecycle phase of every field in one form
#[derive(Debug, Clone)]
pub struct FormState {
    locale: Locale,
    rules: RuleSet,
    values: FieldValues,
    errors: BTreeMap<FieldName, String>,
    phases: BTreeMap<FieldName, FieldPhase>,
    submitting: bool,
}

impl FormState {
    /// Create an empty form with one entry per field in `rules`.
    pub fn new(rules: RuleSet, locale: Locale) -> Self {
        let values = rules.fields().map(|f| (f, String::new())).collect();
        let phases = rules.fields().map(|f| (f, FieldPhase::Untouched)).collect();
        Self {
            locale,
            rules,
            values,
            errors: BTreeMap::new(),
            phases,
            submitting: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Message currently shown for `field`, if any.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All visible field errors.
    pub fn errors(&self) -> &BTreeMap<FieldName, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn phase(&self, field: FieldName) -> FieldPhase {
        self.phases.get(&field).cloned().unwrap_or_default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Record a keystroke: store the value and optimistically clear the
    /// field's error without re-validating.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        if !self.tracks(field) {
            tracing::debug!(field = %field, "Ignoring input for unknown field");
            return;
        }
        self.values.insert(field, value.into());
        self.clear_error(field);
        self.phases.insert(field, FieldPhase::Pending);
    }

    /// Validate one field as it loses focus, updating its error and phase.
    pub fn blur(&mut self, field: FieldName) -> Result<(), ValidationError> {
        if !self.tracks(field) {
            tracing::debug!(field = %field, "Ignoring blur for unknown field");
            return Ok(());
        }
        let result = self.rules.validate(field, &self.values);
        self.apply(field, &result);
        if let Err(ref err) = result {
            tracing::debug!(field = %field, reason = ?err.reason, "Field failed validation");
        }
        result
    }

    /// Validate every field, updating all errors and phases.
    pub fn validate_all(&mut self) -> Vec<ValidationError> {
        let fields: Vec<_> = self.rules.fields().collect();
        let mut errors = Vec::new();
        for field in fields {
            let result = self.rules.validate(field, &self.values);
            self.apply(field, &result);
            if let Err(err) = result {
                errors.push(err);
            }
        }
        errors
    }

    /// Mark `field` invalid and set its message. Other fields are untouched.
    ///
    /// A blank message means valid and behaves like [`clear_error`](Self::clear_error).
    pub fn show_error(&mut self, field: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.trim().is_empty() {
            self.clear_error(field);
            return;
        }
        if !self.tracks(field) {
            tracing::debug!(field = %field, "Ignoring error for unknown field");
            return;
        }
        self.errors.insert(field, message);
        if !matches!(self.phase(field), FieldPhase::Invalid(_)) {
            self.phases.insert(field, FieldPhase::Flagged);
        }
    }

    /// Unmark `field` and empty its message. No-op when already clear.
    /// The phase is left as is.
    pub fn clear_error(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    fn tracks(&self, field: FieldName) -> bool {
        self.phases.contains_key(&field)
    }

    fn apply(&mut self, field: FieldName, result: &Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.clear_error(field);
                self.phases.insert(field, FieldPhase::Valid);
            }
            Err(err) => {
                self.show_error(field, err.message(self.locale));
                self.phases
                    .insert(field, FieldPhase::Invalid(err.reason.clone()));
            }
        }
    }

    fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Return to idle after the simulated request completes.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
