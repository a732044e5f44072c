//! Storefront domain types and logic.
//!
//! This crate holds everything behind a storefront UI that isn't rendering:
//!
//! - **Catalog**: Products, categories and the demo catalog
//! - **Search**: Filter criteria and the filter/sort pipeline
//! - **Cart**: Cart store with variant-aware lines and derived totals
//! - **Wishlist**: Saved products
//! - **Checkout**: Mock three-step checkout and order confirmations
//! - **Session**: Wires a config and catalog to the stores
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut session = Session::demo();
//!
//! let criteria = FilterCriteria::new()
//!     .with_category(Category::Electronics)
//!     .with_sort(SortOption::PriceLow);
//! let results = session.browse(&criteria);
//!
//! let cheapest = results[0].clone();
//! session.cart_mut().add_to_cart(&cheapest, 1, None, None);
//!
//! println!("Total: {}", session.cart().total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod config;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod session;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::config::{FilterDefaults, StoreConfig};
    pub use crate::session::Session;

    // Catalog
    pub use crate::catalog::{Category, Product, ProductSource, StaticCatalog};

    // Cart
    pub use crate::cart::{CartLine, CartStore, CartTotals, PricingPolicy};

    // Wishlist
    pub use crate::wishlist::WishlistStore;

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, OrderConfirmation, OrderLine, ShippingInfo};

    // Search
    pub use crate::search::{FilterCriteria, PriceRange, SortOption};
}
