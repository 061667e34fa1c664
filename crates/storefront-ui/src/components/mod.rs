//! Reusable form widgets

mod button;
mod checkbox;
mod form_input;

pub use button::*;
pub use checkbox::*;
pub use form_input::*;
