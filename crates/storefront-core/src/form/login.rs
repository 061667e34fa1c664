//! Login form view-model

use crate::messages::{Locale, Notice};
use crate::validation::{FieldName, RuleSet, ValidationPolicy};

use super::{FormState, SubmitOutcome};

/// Accepted login. No credentials are checked; this stands in for a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub email: String,
    pub remember_me: bool,
}

impl LoginSuccess {
    pub fn notice(&self) -> Notice {
        Notice::LoginSucceeded {
            email: self.email.clone(),
        }
    }
}

/// Email and password form
#[derive(Debug, Clone)]
pub struct LoginForm {
    state: FormState,
    remember_me: bool,
}

impl LoginForm {
    pub fn new(policy: &ValidationPolicy, locale: Locale) -> Self {
        Self {
            state: FormState::new(RuleSet::login(policy), locale),
            remember_me: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.set_value(field, value);
    }

    pub fn blur(&mut self, field: FieldName) {
        let _ = self.state.blur(field);
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    /// Re-validate both fields and, if they pass, start submitting.
    pub fn submit(&mut self) -> SubmitOutcome<LoginSuccess> {
        if self.state.is_submitting() {
            tracing::debug!("Login submit ignored, already submitting");
            return SubmitOutcome::AlreadySubmitting;
        }

        let errors = self.state.validate_all();
        if !errors.is_empty() {
            tracing::info!(failed = errors.len(), "Login rejected by validation");
            return SubmitOutcome::ValidationFailed(errors);
        }

        self.state.begin_submit();
        let email = self.state.value(FieldName::Email).trim().to_string();
        tracing::info!(email = %email, "Login accepted");
        SubmitOutcome::Success(LoginSuccess {
            email,
            remember_me: self.remember_me,
        })
    }

    pub fn finish_submit(&mut self) {
        self.state.finish_submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldPhase;

    fn form() -> LoginForm {
        LoginForm::new(&ValidationPolicy::default(), Locale::English)
    }

    #[test]
    fn test_submit_empty_form_shows_both_errors() {
        let mut form = form();
        let outcome = form.submit();
        match outcome {
            SubmitOutcome::ValidationFailed(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(form.state().error(FieldName::Email), Some("Email is required"));
        assert_eq!(
            form.state().error(FieldName::Password),
            Some("Password is required")
        );
        assert!(!form.state().is_submitting());
    }

    #[test]
    fn test_submit_valid_form_succeeds() {
        let mut form = form();
        form.input(FieldName::Email, "a@b.com");
        form.input(FieldName::Password, "secret");

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Success(LoginSuccess {
                email: "a@b.com".to_string(),
                remember_me: false,
            })
        );
        assert!(!form.state().has_errors());
        assert!(form.state().is_submitting());
    }

    #[test]
    fn test_resubmit_while_submitting_is_rejected() {
        let mut form = form();
        form.input(FieldName::Email, "a@b.com");
        form.input(FieldName::Password, "secret");

        assert!(form.submit().is_success());
        assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitting);

        form.finish_submit();
        assert!(form.submit().is_success());
    }

    #[test]
    fn test_blur_validates_single_field() {
        let mut form = form();
        form.input(FieldName::Password, "12345");
        form.blur(FieldName::Password);
        assert_eq!(
            form.state().error(FieldName::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(form.state().phase(FieldName::Email), FieldPhase::Untouched);
        assert_eq!(form.state().error(FieldName::Email), None);
    }

    #[test]
    fn test_registration_only_field_is_ignored() {
        let mut form = form();
        form.input(FieldName::FirstName, "x");
        form.blur(FieldName::FirstName);

        assert_eq!(form.state().values().len(), 2);
        assert_eq!(form.state().value(FieldName::FirstName), "");
        assert_eq!(form.state().phase(FieldName::FirstName), FieldPhase::Untouched);
    }

    #[test]
    fn test_email_is_trimmed_in_success() {
        let mut form = form();
        form.input(FieldName::Email, "  a@b.com ");
        form.input(FieldName::Password, "secret");
        form.set_remember_me(true);

        match form.submit() {
            SubmitOutcome::Success(success) => {
                assert_eq!(success.email, "a@b.com");
                assert!(success.remember_me);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_vietnamese_messages() {
        let mut form = LoginForm::new(&ValidationPolicy::default(), Locale::Vietnamese);
        let _ = form.submit();
        assert_eq!(form.state().error(FieldName::Email), Some("Email là bắt buộc"));
    }
}
