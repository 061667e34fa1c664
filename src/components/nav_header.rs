//! Navigation Header Component
//!
//! Brand on the left, page links on the right.

use dioxus::prelude::*;
use storefront_core::{Locale, UiText};

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Login,
    Register,
}

impl NavLocation {
    pub fn all() -> &'static [NavLocation] {
        &[NavLocation::Home, NavLocation::Login, NavLocation::Register]
    }

    /// Localized link text
    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            NavLocation::Home => locale.text(UiText::NavHome),
            NavLocation::Login => locale.text(UiText::NavLogin),
            NavLocation::Register => locale.text(UiText::NavRegister),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Login => Route::Login {},
            NavLocation::Register => Route::Register {},
        }
    }
}

#[component]
pub fn NavHeader(current: NavLocation, locale: Locale) -> Element {
    rsx! {
        header { class: "nav-header",
            Link { to: Route::Home {}, class: "nav-brand", "{locale.text(UiText::Brand)}" }
            nav { class: "nav-links",
                for loc in NavLocation::all() {
                    {
                        let link_class = if *loc == current { "nav-link active" } else { "nav-link" };
                        rsx! {
                            Link {
                                key: "{loc:?}",
                                to: loc.route(),
                                class: "{link_class}",
                                "{loc.label(locale)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_are_localized() {
        assert_eq!(NavLocation::Login.label(Locale::English), "Sign In");
        assert_eq!(NavLocation::Login.label(Locale::Vietnamese), "Đăng nhập");
    }

    #[test]
    fn nav_routes() {
        assert_eq!(NavLocation::Register.route(), Route::Register {});
        assert_eq!(NavLocation::all().len(), 3);
    }
}
