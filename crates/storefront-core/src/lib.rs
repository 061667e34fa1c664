//! SportZone Storefront Core Library
//!
//! UI-agnostic view-models for a small demo sports storefront.
//!
//! ## Overview
//!
//! Two independent pieces:
//!
//! - **Catalog**: a fixed product table rendered into one [`ProductCard`] per
//!   product, with a stub add-to-cart confirmation.
//! - **Forms**: [`LoginForm`] and [`RegisterForm`] own their field values and
//!   error messages, validate on blur and submit, and report an explicit
//!   [`SubmitOutcome`] instead of navigating or alerting themselves.
//!
//! There is no persistence, no network I/O and no real authentication.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storefront_core::{FieldName, LoginForm, Locale, SubmitOutcome, ValidationPolicy};
//!
//! let mut form = LoginForm::new(&ValidationPolicy::default(), Locale::English);
//! form.input(FieldName::Email, "a@b.com");
//! form.input(FieldName::Password, "secret");
//!
//! match form.submit() {
//!     SubmitOutcome::Success(ok) => println!("{}", Locale::English.notice(&ok.notice())),
//!     SubmitOutcome::ValidationFailed(errors) => eprintln!("{} errors", errors.len()),
//!     SubmitOutcome::AlreadySubmitting => {}
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod messages;
pub mod validation;

// Re-exports
pub use catalog::{featured_products, render_catalog, CatalogView, Price, Product, ProductCard};
pub use config::StorefrontConfig;
pub use error::{StorefrontError, StorefrontResult};
pub use form::{
    FieldPhase, FormState, LoginForm, LoginSuccess, RegisterForm, RegistrationSuccess,
    SubmitOutcome,
};
pub use messages::{Locale, Notice, UiText};
pub use validation::{
    is_valid_email, FieldName, PasswordComposition, Reason, Rule, RuleSet, ValidationError,
    ValidationPolicy,
};
