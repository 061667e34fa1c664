//! Rule definitions and the per-form rule sets

use std::sync::OnceLock;

use regex::Regex;

use super::{FieldName, FieldValues, PasswordComposition, Reason, ValidationError, ValidationPolicy};

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check the basic email shape. Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// A single check applied to a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace
    Required,
    /// Like `Required`, reported as "please confirm your password"
    ConfirmationRequired,
    /// Minimum length in characters; `trimmed` ignores surrounding whitespace
    MinChars { min: usize, trimmed: bool },
    EmailShape,
    /// Lowercase, uppercase and digit all present
    PasswordComposition,
    /// Value must equal the password field exactly
    MatchesPassword,
}

impl Rule {
    /// Apply the rule. `values` gives access to the other fields of the form.
    pub fn check(&self, value: &str, values: &FieldValues) -> Result<(), Reason> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(Reason::Required);
                }
            }
            Rule::ConfirmationRequired => {
                if value.trim().is_empty() {
                    return Err(Reason::ConfirmRequired);
                }
            }
            Rule::MinChars { min, trimmed } => {
                let counted = if *trimmed { value.trim() } else { value };
                if counted.chars().count() < *min {
                    return Err(Reason::TooShort { min: *min });
                }
            }
            Rule::EmailShape => {
                if !is_valid_email(value) {
                    return Err(Reason::InvalidEmail);
                }
            }
            Rule::PasswordComposition => {
                let lower = value.chars().any(|c| c.is_ascii_lowercase());
                let upper = value.chars().any(|c| c.is_ascii_uppercase());
                let digit = value.chars().any(|c| c.is_ascii_digit());
                if !(lower && upper && digit) {
                    return Err(Reason::WeakPassword);
                }
            }
            Rule::MatchesPassword => {
                let password = values
                    .get(&FieldName::Password)
                    .map(String::as_str)
                    .unwrap_or("");
                if value != password {
                    return Err(Reason::PasswordMismatch);
                }
            }
        }
        Ok(())
    }
}

/// Ordered rules for every text field of one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl RuleSet {
    /// Email and password, password only checked for length.
    pub fn login(policy: &ValidationPolicy) -> Self {
        Self {
            fields: vec![
                (FieldName::Email, vec![Rule::Required, Rule::EmailShape]),
                (
                    FieldName::Password,
                    vec![
                        Rule::Required,
                        Rule::MinChars {
                            min: policy.login_password_min,
                            trimmed: false,
                        },
                    ],
                ),
            ],
        }
    }

    /// Names, email, password and its confirmation.
    pub fn registration(policy: &ValidationPolicy) -> Self {
        let name_rules = vec![
            Rule::Required,
            Rule::MinChars {
                min: policy.name_min,
                trimmed: true,
            },
        ];

        let mut password_rules = vec![
            Rule::Required,
            Rule::MinChars {
                min: policy.register_password_min,
                trimmed: false,
            },
        ];
        if policy.password_composition == PasswordComposition::Strict {
            password_rules.push(Rule::PasswordComposition);
        }

        Self {
            fields: vec![
                (FieldName::FirstName, name_rules.clone()),
                (FieldName::LastName, name_rules),
                (FieldName::Email, vec![Rule::Required, Rule::EmailShape]),
                (FieldName::Password, password_rules),
                (
                    FieldName::ConfirmPassword,
                    vec![Rule::ConfirmationRequired, Rule::MatchesPassword],
                ),
            ],
        }
    }

    /// Fields covered by this set, in display order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Validate one field against the current form values.
    ///
    /// Fields without rules always pass.
    pub fn validate(&self, field: FieldName, values: &FieldValues) -> Result<(), ValidationError> {
        let value = values.get(&field).map(String::as_str).unwrap_or("");
        for rule in self.rules_for(field) {
            rule.check(value, values)
                .map_err(|reason| ValidationError::new(field, reason))?;
        }
        Ok(())
    }

    /// Validate every field, returning all failures in display order.
    pub fn validate_all(&self, values: &FieldValues) -> Vec<ValidationError> {
        self.fields()
            .filter_map(|field| self.validate(field, values).err())
            .collect()
    }
}
