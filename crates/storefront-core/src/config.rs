//! Storefront configuration.
//!
//! Everything has a default; a JSON file may override any subset:
//!
//! ```json
//! {
//!   "locale": "vi",
//!   "submit_delay_ms": 500,
//!   "policy": { "password_composition": "length_only" }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};
use crate::messages::Locale;
use crate::validation::ValidationPolicy;

/// Default simulated request latency before a submit reports success.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub locale: Locale,
    pub policy: ValidationPolicy,
    /// Cosmetic delay before success is reported; 0 disables it
    pub submit_delay_ms: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            policy: ValidationPolicy::default(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> StorefrontResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), locale = %config.locale, "Loaded configuration");
        Ok(config)
    }

    /// Reject thresholds that would make a rule meaningless.
    pub fn validate(&self) -> StorefrontResult<()> {
        let policy = &self.policy;
        for (name, value) in [
            ("login_password_min", policy.login_password_min),
            ("register_password_min", policy.register_password_min),
            ("name_min", policy.name_min),
        ] {
            if value == 0 {
                return Err(StorefrontError::Config(format!("{} must be at least 1", name)));
            }
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PasswordComposition;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = StorefrontConfig::from_json(
            r#"{"locale": "vi", "policy": {"password_composition": "length_only"}}"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Vietnamese);
        assert_eq!(config.policy.password_composition, PasswordComposition::LengthOnly);
        assert_eq!(config.policy.login_password_min, 6);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = StorefrontConfig::from_json(r#"{"policy": {"name_min": 0}}"#).unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
        assert!(err.to_string().contains("name_min"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = StorefrontConfig::from_json("{ locale: ").unwrap_err();
        assert!(matches!(err, StorefrontError::Serialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storefront.json");
        std::fs::write(&path, r#"{"submit_delay_ms": 0}"#).unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.submit_delay(), Duration::ZERO);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = StorefrontConfig::load(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, StorefrontError::Io(_)));
    }
}
