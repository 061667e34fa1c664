//! Catalog Grid Component
//!
//! Mounts the cards of a [`CatalogView`] into its named container.

use dioxus::prelude::*;
use storefront_core::{CatalogView, ProductCard as CardModel};

use super::ProductCard;

#[component]
pub fn CatalogGrid(
    view: CatalogView,
    add_label: String,
    #[props(default)] on_add: Option<EventHandler<CardModel>>,
) -> Element {
    rsx! {
        div {
            id: "{view.container_id()}",
            class: "products-grid",
            for card in view.cards().iter() {
                ProductCard {
                    key: "{card.product_id}",
                    card: card.clone(),
                    add_label: add_label.clone(),
                    on_add: on_add,
                }
            }
        }
    }
}
