//! Home page - hero banner and featured products.

use dioxus::prelude::*;
use storefront_core::{featured_products, CatalogView, UiText};
use storefront_ui::{button_class, ButtonSize, ButtonVariant};

use crate::app::Route;
use crate::components::{
    CatalogGrid, NavHeader, NavLocation, NoticeModal, PendingNotice, SiteFooter,
};
use crate::context::use_config;

/// Container the featured cards are mounted into
pub const PRODUCTS_GRID_ID: &str = "productsGrid";

/// Icon, title and description of each selling point
const FEATURES: [(&str, UiText, UiText); 4] = [
    ("\u{1F69A}", UiText::FeatureShippingTitle, UiText::FeatureShippingText),
    ("\u{21A9}\u{FE0F}", UiText::FeatureReturnsTitle, UiText::FeatureReturnsText),
    ("\u{1F512}", UiText::FeatureSecureTitle, UiText::FeatureSecureText),
    ("\u{2B50}", UiText::FeatureQualityTitle, UiText::FeatureQualityText),
];

#[component]
pub fn Home() -> Element {
    let config = use_config();
    let locale = config.locale;
    let mut notice = use_signal(|| Option::<PendingNotice>::None);

    // Rendered once per mount; the catalog never changes while the page is up
    let view = use_hook(move || {
        let mut view = CatalogView::new(PRODUCTS_GRID_ID);
        if let Err(e) = view.render(&featured_products(locale)) {
            tracing::error!("Failed to render catalog: {}", e);
        }
        view
    });

    let on_add = move |card: storefront_core::ProductCard| {
        notice.set(Some(PendingNotice::stay(locale.notice(&card.add_to_cart()))));
    };

    let register_class = button_class(ButtonVariant::Primary, ButtonSize::Large, None);
    let login_class = button_class(ButtonVariant::Outline, ButtonSize::Large, None);

    rsx! {
        NavHeader { current: NavLocation::Home, locale }

        main { class: "home",
            section { class: "hero",
                div { class: "hero-content",
                    h1 { class: "hero-title", "{locale.text(UiText::HeroTitle)}" }
                    p { class: "hero-subtitle", "{locale.text(UiText::HeroSubtitle)}" }
                    div { class: "hero-actions",
                        Link { to: Route::Register {}, class: "{register_class}",
                            "{locale.text(UiText::NavRegister)}"
                        }
                        Link { to: Route::Login {}, class: "{login_class}",
                            "{locale.text(UiText::NavLogin)}"
                        }
                    }
                }
            }

            section { class: "featured-products",
                div { class: "section-header",
                    h2 { class: "section-title", "{locale.text(UiText::FeaturedTitle)}" }
                    p { class: "section-subtitle", "{locale.text(UiText::FeaturedSubtitle)}" }
                }
                CatalogGrid {
                    view,
                    add_label: locale.text(UiText::AddToCart).to_string(),
                    on_add,
                }
            }

            section { class: "features",
                div { class: "features-grid",
                    for (icon, title, text) in FEATURES {
                        div { key: "{title:?}", class: "feature-item",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{locale.text(title)}" }
                            p { "{locale.text(text)}" }
                        }
                    }
                }
            }
        }

        SiteFooter { locale }

        NoticeModal { notice, dismiss_label: locale.text(UiText::Dismiss).to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Locale;

    #[test]
    fn features_have_copy_in_every_locale() {
        for locale in [Locale::English, Locale::Vietnamese] {
            for (icon, title, text) in FEATURES {
                assert!(!icon.is_empty());
                assert!(!locale.text(title).is_empty());
                assert!(!locale.text(text).is_empty());
            }
        }
        assert_eq!(Locale::English.text(FEATURES[0].1), "Free Shipping");
    }
}
