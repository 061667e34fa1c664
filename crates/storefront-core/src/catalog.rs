//! Product catalog and card rendering.
//!
//! The catalog is a fixed table compiled into the binary; there is no
//! create/update/delete. Rendering turns each [`Product`] into a
//! [`ProductCard`] holding exactly what the view displays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};
use crate::messages::{Locale, Notice};

/// Currency amount in minor units (cents).
///
/// Always displayed as a two-decimal amount with a leading `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Formatted label, e.g. `$129.99`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Immutable catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Price,
    /// Image URL
    pub image: String,
    pub category: String,
}

impl Product {
    /// Build a product, failing fast on a blank name, image or category.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> StorefrontResult<Self> {
        let product = Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
        };
        product.check()?;
        Ok(product)
    }

    fn check(&self) -> StorefrontResult<()> {
        let missing = if self.name.trim().is_empty() {
            Some("name")
        } else if self.image.trim().is_empty() {
            Some("image")
        } else if self.category.trim().is_empty() {
            Some("category")
        } else {
            None
        };
        match missing {
            Some(field) => Err(StorefrontError::InvalidProduct {
                id: self.id,
                reason: format!("{} is empty", field),
            }),
            None => Ok(()),
        }
    }
}

struct Entry {
    id: u32,
    cents: u64,
    image: &'static str,
    en: (&'static str, &'static str),
    vi: (&'static str, &'static str),
}

const FEATURED: &[Entry] = &[
    Entry {
        id: 1,
        cents: 12_999,
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
        en: ("Pro Running Shoes", "Running"),
        vi: ("Giày Chạy Bộ Chuyên Nghiệp", "Chạy Bộ"),
    },
    Entry {
        id: 2,
        cents: 8_999,
        image: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=400&h=400&fit=crop",
        en: ("Basketball Pro", "Basketball"),
        vi: ("Bóng Rổ Chuyên Nghiệp", "Bóng Rổ"),
    },
    Entry {
        id: 3,
        cents: 3_499,
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
        en: ("Training Gloves", "Fitness"),
        vi: ("Găng Tay Tập Luyện", "Thể Hình"),
    },
    Entry {
        id: 4,
        cents: 5_999,
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=400&fit=crop",
        en: ("Football Jersey", "Football"),
        vi: ("Áo Đấu Bóng Đá", "Bóng Đá"),
    },
    Entry {
        id: 5,
        cents: 4_499,
        image: "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400&h=400&fit=crop",
        en: ("Yoga Mat Premium", "Fitness"),
        vi: ("Thảm Yoga Cao Cấp", "Thể Hình"),
    },
    Entry {
        id: 6,
        cents: 14_999,
        image: "https://images.unsplash.com/photo-1622163642999-9586b0f8b0a5?w=400&h=400&fit=crop",
        en: ("Tennis Racket", "Tennis"),
        vi: ("Vợt Tennis", "Tennis"),
    },
];

/// The featured products in display order, names translated for `locale`.
pub fn featured_products(locale: Locale) -> Vec<Product> {
    FEATURED
        .iter()
        .map(|entry| {
            let (name, category) = match locale {
                Locale::English => entry.en,
                Locale::Vietnamese => entry.vi,
            };
            Product {
                id: entry.id,
                name: name.to_string(),
                price: Price::from_cents(entry.cents),
                image: entry.image.to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}

/// One rendered product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product_id: u32,
    pub image_src: String,
    pub image_alt: String,
    pub lazy_image: bool,
    pub category_badge: String,
    pub name: String,
    pub price_label: String,
}

impl ProductCard {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            image_src: product.image.clone(),
            image_alt: product.name.clone(),
            lazy_image: true,
            category_badge: product.category.clone(),
            name: product.name.clone(),
            price_label: product.price.label(),
        }
    }

    /// Stub add-to-cart action: nothing is stored, the caller only shows
    /// the returned confirmation.
    pub fn add_to_cart(&self) -> Notice {
        tracing::info!(product_id = self.product_id, "Add to cart requested");
        Notice::AddedToCart {
            name: self.name.clone(),
            price: self.price_label.clone(),
        }
    }
}

/// Render one card per product, in input order.
pub fn render_catalog(products: &[Product]) -> StorefrontResult<Vec<ProductCard>> {
    products
        .iter()
        .map(|product| {
            product.check()?;
            Ok(ProductCard::from_product(product))
        })
        .collect()
}

/// A named container holding the currently rendered cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    container_id: String,
    cards: Vec<ProductCard>,
}

impl CatalogView {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            cards: Vec::new(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Replace the container's content with freshly rendered cards.
    ///
    /// On error the previous content is kept.
    pub fn render(&mut self, products: &[Product]) -> StorefrontResult<&[ProductCard]> {
        self.cards = render_catalog(products)?;
        tracing::debug!(
            container = %self.container_id,
            cards = self.cards.len(),
            "Catalog rendered"
        );
        Ok(&self.cards)
    }
}
