//! UI components for the storefront pages.

mod catalog_grid;
mod nav_header;
mod notice_modal;
mod product_card;
mod site_footer;

pub use catalog_grid::CatalogGrid;
pub use nav_header::{NavHeader, NavLocation};
pub use notice_modal::{NoticeModal, PendingNotice};
pub use product_card::ProductCard;
pub use site_footer::SiteFooter;
