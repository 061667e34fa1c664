//! Page components for the storefront.

mod home;
mod login;
mod register;

pub use home::Home;
pub use login::Login;
pub use register::Register;
