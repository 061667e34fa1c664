//! Site Footer Component

use dioxus::prelude::*;
use storefront_core::{Locale, UiText};

use super::NavLocation;

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                div { class: "footer-section",
                    h3 { class: "footer-title", "{locale.text(UiText::Brand)}" }
                    p { class: "footer-description", "{locale.text(UiText::FooterTagline)}" }
                }
                div { class: "footer-section",
                    h4 { class: "footer-heading", "{locale.text(UiText::FooterLinksTitle)}" }
                    ul { class: "footer-links",
                        for loc in NavLocation::all() {
                            li { key: "{loc:?}",
                                Link { to: loc.route(), "{loc.label(locale)}" }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "{locale.text(UiText::FooterRights)}" }
            }
        }
    }
}
