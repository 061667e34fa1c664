//! Configuration context for the storefront.
//!
//! The configuration is resolved once in `main` (defaults, optional JSON
//! file, command-line overrides) and provided to every page.

use dioxus::prelude::*;
use storefront_core::StorefrontConfig;

/// Get the configuration resolved from the command line.
pub fn get_config() -> StorefrontConfig {
    crate::get_config()
}

/// Hook to access the configuration from context.
///
/// # Example
///
/// ```ignore
/// let config = use_config();
/// let form = use_signal(|| LoginForm::new(&config.policy, config.locale));
/// ```
pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>()
}
