//! Registration form view-model

use crate::messages::{Locale, Notice};
use crate::validation::{FieldName, Reason, RuleSet, ValidationError, ValidationPolicy};

use super::{FormState, SubmitOutcome};

/// Accepted registration. No account is created or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSuccess {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegistrationSuccess {
    pub fn notice(&self) -> Notice {
        Notice::Registered {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Name, email, password, confirmation and terms form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    state: FormState,
    terms_accepted: bool,
}

impl RegisterForm {
    pub fn new(policy: &ValidationPolicy, locale: Locale) -> Self {
        Self {
            state: FormState::new(RuleSet::registration(policy), locale),
            terms_accepted: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Record a keystroke.
    ///
    /// Editing the password re-checks a non-empty confirmation straight away,
    /// so a mismatch shows without waiting for the confirmation to blur.
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.set_value(field, value);
        if field == FieldName::Password && !self.state.value(FieldName::ConfirmPassword).is_empty()
        {
            let _ = self.state.blur(FieldName::ConfirmPassword);
        }
    }

    pub fn blur(&mut self, field: FieldName) {
        let _ = self.state.blur(field);
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Validate every field and the terms checkbox.
    ///
    /// An unchecked checkbox is reported as a [`FieldName::Terms`] error after
    /// any field errors; it never appears in the field error map.
    pub fn submit(&mut self) -> SubmitOutcome<RegistrationSuccess> {
        if self.state.is_submitting() {
            tracing::debug!("Registration submit ignored, already submitting");
            return SubmitOutcome::AlreadySubmitting;
        }

        let mut errors = self.state.validate_all();
        if !self.terms_accepted {
            errors.push(ValidationError::new(FieldName::Terms, Reason::TermsNotAccepted));
        }
        if !errors.is_empty() {
            tracing::info!(
                failed = errors.len(),
                terms_accepted = self.terms_accepted,
                "Registration rejected by validation"
            );
            return SubmitOutcome::ValidationFailed(errors);
        }

        self.state.begin_submit();
        let success = RegistrationSuccess {
            first_name: self.state.value(FieldName::FirstName).trim().to_string(),
            last_name: self.state.value(FieldName::LastName).trim().to_string(),
            email: self.state.value(FieldName::Email).trim().to_string(),
        };
        tracing::info!(email = %success.email, "Registration accepted");
        SubmitOutcome::Success(success)
    }

    pub fn finish_submit(&mut self) {
        self.state.finish_submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::new(&ValidationPolicy::default(), Locale::English);
        form.input(FieldName::FirstName, "Ada");
        form.input(FieldName::LastName, "Lovelace");
        form.input(FieldName::Email, "ada@example.com");
        form.input(FieldName::Password, "Abc12345");
        form.input(FieldName::ConfirmPassword, "Abc12345");
        form
    }

    #[test]
    fn test_terms_unchecked_is_single_blocking_failure() {
        let mut form = filled_form();
        let outcome = form.submit();

        match &outcome {
            SubmitOutcome::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, FieldName::Terms);
                assert_eq!(errors[0].reason, Reason::TermsNotAccepted);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(outcome.blocking_errors().len(), 1);
        assert!(!form.state().has_errors());
        assert!(!form.state().is_submitting());
    }

    #[test]
    fn test_all_checks_pass() {
        let mut form = filled_form();
        form.set_terms_accepted(true);

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Success(RegistrationSuccess {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            })
        );
        assert!(form.state().is_submitting());
    }

    #[test]
    fn test_password_change_reflags_confirmation() {
        let mut form = filled_form();
        form.blur(FieldName::ConfirmPassword);
        assert_eq!(form.state().error(FieldName::ConfirmPassword), None);

        form.input(FieldName::Password, "Abc123456");
        assert_eq!(
            form.state().error(FieldName::ConfirmPassword),
            Some("Passwords do not match")
        );

        form.input(FieldName::Password, "Abc12345");
        assert_eq!(form.state().error(FieldName::ConfirmPassword), None);
    }

    #[test]
    fn test_password_change_leaves_empty_confirmation_alone() {
        let mut form = RegisterForm::new(&ValidationPolicy::default(), Locale::English);
        form.input(FieldName::Password, "Abc12345");
        assert_eq!(form.state().error(FieldName::ConfirmPassword), None);
    }

    #[test]
    fn test_field_errors_and_terms_reported_together() {
        let mut form = RegisterForm::new(&ValidationPolicy::default(), Locale::English);
        form.input(FieldName::FirstName, "A");

        match form.submit() {
            SubmitOutcome::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 6);
                assert_eq!(errors.last().map(|e| e.field), Some(FieldName::Terms));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            form.state().error(FieldName::FirstName),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(form.state().error(FieldName::Terms), None);
    }

    #[test]
    fn test_success_notice_names_user() {
        let success = RegistrationSuccess {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let text = Locale::English.notice(&success.notice());
        assert!(text.contains("Name: Ada Lovelace"));
        assert!(text.contains("ada@example.com"));
    }
}
