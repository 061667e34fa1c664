use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::{Home, Login, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero and featured product grid
/// - `/login` - Sign-in form
/// - `/register` - Account creation form
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

/// Root application component.
///
/// Provides global styles, configuration context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
