//! Validation thresholds

use serde::{Deserialize, Serialize};

/// Composition requirement for registration passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordComposition {
    /// Only the minimum length applies
    LengthOnly,
    /// At least one lowercase letter, one uppercase letter and one digit
    #[default]
    Strict,
}

/// Thresholds used to build the login and registration rule sets.
///
/// Login keeps the shorter minimum of 6 characters with no composition
/// requirement; registration asks for 8 characters and, by default, mixed
/// case plus a digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub login_password_min: usize,
    pub register_password_min: usize,
    pub name_min: usize,
    pub password_composition: PasswordComposition,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            login_password_min: 6,
            register_password_min: 8,
            name_min: 2,
            password_composition: PasswordComposition::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.login_password_min, 6);
        assert_eq!(policy.register_password_min, 8);
        assert_eq!(policy.name_min, 2);
        assert_eq!(policy.password_composition, PasswordComposition::Strict);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let policy: ValidationPolicy =
            serde_json::from_str(r#"{"password_composition": "length_only"}"#).unwrap();
        assert_eq!(policy.password_composition, PasswordComposition::LengthOnly);
        assert_eq!(policy.register_password_min, 8);
    }
}
