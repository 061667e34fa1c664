//! Product Card Component
//!
//! One catalog entry: lazy image with the category badge over it, then
//! name, price and the add-to-cart action.

use dioxus::prelude::*;
use storefront_core::ProductCard as CardModel;
use storefront_ui::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn ProductCard(
    /// Rendered card data
    card: CardModel,
    /// Label for the add-to-cart button
    add_label: String,
    /// Add-to-cart handler; the button is hidden when absent
    #[props(default)]
    on_add: Option<EventHandler<CardModel>>,
) -> Element {
    let loading = if card.lazy_image { "lazy" } else { "eager" };
    let card_for_add = card.clone();

    rsx! {
        div { class: "product-card",
            div { class: "product-image",
                img {
                    src: "{card.image_src}",
                    alt: "{card.image_alt}",
                    "loading": "{loading}",
                }
                span { class: "product-category", "{card.category_badge}" }
            }
            div { class: "product-info",
                h3 { class: "product-name", "{card.name}" }
                div { class: "product-footer",
                    span { class: "product-price", "{card.price_label}" }
                    if let Some(handler) = on_add {
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Small,
                            onclick: move |_| handler.call(card_for_add.clone()),
                            "{add_label}"
                        }
                    }
                }
            }
        }
    }
}
