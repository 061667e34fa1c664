//! SportZone Storefront UI Components
//!
//! Dioxus widgets shared by the storefront pages. They carry no validation
//! logic of their own: values and error messages come from the form
//! view-models in `storefront-core`, and every change is reported back
//! through event handlers.

pub mod components;

pub use components::*;
