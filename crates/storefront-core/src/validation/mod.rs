//! Field validation for the login and registration forms.
//!
//! A form is validated by a [`RuleSet`]: for every field an ordered list of
//! [`Rule`]s, the first failing rule deciding the [`Reason`]. Reasons are keys,
//! turned into text by [`crate::messages::Locale::reason`].

mod policy;
mod rules;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::Locale;

pub use policy::{PasswordComposition, ValidationPolicy};
pub use rules::{is_valid_email, Rule, RuleSet};

/// Current string value of every field in a form.
pub type FieldValues = BTreeMap<FieldName, String>;

/// One named input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    /// Terms acceptance checkbox (registration only)
    Terms,
}

impl FieldName {
    /// Element id used by the rendered input.
    pub fn id(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Terms => "terms",
        }
    }

    /// HTML input type for this field.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password | FieldName::ConfirmPassword => "password",
            FieldName::Terms => "checkbox",
            FieldName::FirstName | FieldName::LastName => "text",
        }
    }

    /// Whether the value must never appear in logs or notices.
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reason {
    Required,
    TooShort { min: usize },
    InvalidEmail,
    /// Missing a lowercase letter, an uppercase letter or a digit
    WeakPassword,
    ConfirmRequired,
    PasswordMismatch,
    TermsNotAccepted,
}

/// A single failed field, the only failure kind the forms produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", Locale::English.reason(*field, reason))]
pub struct ValidationError {
    pub field: FieldName,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: FieldName, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Localized message for this failure.
    pub fn message(&self, locale: Locale) -> String {
        locale.reason(self.field, &self.reason)
    }

    /// Blocking failures are shown as a standalone notice rather than
    /// under an input (the terms checkbox has no message region).
    pub fn is_blocking(&self) -> bool {
        self.field == FieldName::Terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_match_inputs() {
        assert_eq!(FieldName::FirstName.id(), "firstName");
        assert_eq!(FieldName::ConfirmPassword.id(), "confirmPassword");
        assert_eq!(FieldName::Email.to_string(), "email");
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldName::Email.input_type(), "email");
        assert_eq!(FieldName::ConfirmPassword.input_type(), "password");
        assert_eq!(FieldName::Terms.input_type(), "checkbox");
        assert_eq!(FieldName::LastName.input_type(), "text");
    }

    #[test]
    fn test_secret_fields() {
        assert!(FieldName::Password.is_secret());
        assert!(FieldName::ConfirmPassword.is_secret());
        assert!(!FieldName::Email.is_secret());
    }

    #[test]
    fn test_validation_error_display_is_english() {
        let err = ValidationError::new(FieldName::ConfirmPassword, Reason::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(err.message(Locale::Vietnamese), "Mật khẩu không khớp");
    }
}
