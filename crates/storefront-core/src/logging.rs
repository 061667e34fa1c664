//! Tracing subscriber setup.
//!
//! ```ignore
//! use storefront_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("storefront=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over the builder's filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{StorefrontError, StorefrontResult};

/// Filter used when neither `RUST_LOG` nor `with_filter` is given.
pub const DEFAULT_FILTER: &str = "storefront=info,storefront_core=info";

/// Builder for the global tracing subscriber
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directives (e.g., "storefront=info,storefront_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colours (for log files or CI).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Filter that `init` will install.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER))
        })
    }

    /// Install the subscriber globally. Fails if one is already set.
    pub fn init(self) -> StorefrontResult<()> {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.ansi);

        tracing_subscriber::registry()
            .with(self.filter())
            .with(fmt_layer)
            .try_init()
            .map_err(|e| StorefrontError::Logging(e.to_string()))
    }
}
